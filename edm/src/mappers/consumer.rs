use edm_config::shared::MappingConfig;

use crate::conversions::country::country_to_code;
use crate::types::{ConsumerRow, RawRecord};

/// Maps a raw record to its single consumer row.
///
/// A direct field copy with no derived key: the identity hash is reused
/// verbatim as the consumer key and serves as the join key across all four
/// extracts. Columns the feed does not carry (salutation, middle name,
/// suffix, nationality) are emitted as empty strings so the column set stays
/// fixed; the deletion flag defaults to false.
pub fn map_consumer(record: &RawRecord, mapping: &MappingConfig) -> ConsumerRow {
    ConsumerRow {
        consumer_key: record.consumer_key().to_string(),
        deletion_flag: false,
        email_address: record.email.clone(),
        salutation: String::new(),
        first_name: record.name.clone(),
        middle_name: String::new(),
        last_name: record.surname.clone(),
        suffix: String::new(),
        gender: record.gender.clone(),
        birthdate: record.birth_date.clone(),
        nationality: String::new(),
        phone_number: record.mobile_phone_fb.clone(),
        address_line_1: record.address.clone(),
        address_line_2: record.district.clone(),
        postal_code: record.zipcode.clone(),
        city: record.city.clone(),
        region_key: record.state.clone(),
        country_iso_2: country_to_code(&record.country, &mapping.country_aliases).to_string(),
    }
}
