use serde::Serialize;

/// One row of the `Consumer` extract.
///
/// Directly copied from the raw record with country normalization applied;
/// the key is the record's identity hash reused verbatim. Columns with no
/// source counterpart are emitted as empty strings so the column set stays
/// fixed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsumerRow {
    #[serde(rename = "Consumer_Key")]
    pub consumer_key: String,
    #[serde(rename = "Deletion_Flag")]
    pub deletion_flag: bool,
    #[serde(rename = "Email_Address")]
    pub email_address: String,
    #[serde(rename = "Salutation")]
    pub salutation: String,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Middle_Name")]
    pub middle_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Suffix")]
    pub suffix: String,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "Birthdate")]
    pub birthdate: String,
    #[serde(rename = "Nationality")]
    pub nationality: String,
    #[serde(rename = "Phone_Number")]
    pub phone_number: String,
    #[serde(rename = "Address_Line_1")]
    pub address_line_1: String,
    #[serde(rename = "Address_Line_2")]
    pub address_line_2: String,
    #[serde(rename = "Postal_Code")]
    pub postal_code: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Region_Key")]
    pub region_key: String,
    #[serde(rename = "Country_ISO_2")]
    pub country_iso_2: String,
}

/// One row of the `Consent_Event` extract, one per raw record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsentEventRow {
    #[serde(rename = "Consumer_Key")]
    pub consumer_key: String,
    #[serde(rename = "Consent_Event_Key")]
    pub consent_event_key: String,
    #[serde(rename = "Data_Collection_Type")]
    pub data_collection_type: String,
    #[serde(rename = "Consent_Sub_Level")]
    pub consent_sub_level: String,
    #[serde(rename = "OpCo")]
    pub opco: String,
    #[serde(rename = "Legal_Text")]
    pub legal_text: String,
    #[serde(rename = "Consent_Date")]
    pub consent_date: String,
    #[serde(rename = "Data_Use_Purpose")]
    pub data_use_purpose: String,
    #[serde(rename = "Consent_Status")]
    pub consent_status: String,
    #[serde(rename = "Data_Use_Channel")]
    pub data_use_channel: String,
}

/// One row of the `Online_Engagement` extract, one per nested source entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OnlineEngagementRow {
    #[serde(rename = "Online_Engagement_Type")]
    pub online_engagement_type: String,
    #[serde(rename = "Platform_Name")]
    pub platform_name: String,
    #[serde(rename = "Url")]
    pub url: String,
    #[serde(rename = "Referring_Url")]
    pub referring_url: String,
    #[serde(rename = "Page_Name")]
    pub page_name: String,
    #[serde(rename = "Operating_System")]
    pub operating_system: String,
    #[serde(rename = "Consumer_Key")]
    pub consumer_key: String,
    #[serde(rename = "Campaign_Key")]
    pub campaign_key: String,
    #[serde(rename = "Online_Engagement_Date")]
    pub online_engagement_date: String,
    #[serde(rename = "Engagement_Channel")]
    pub engagement_channel: String,
    #[serde(rename = "Asset_Key")]
    pub asset_key: String,
    #[serde(rename = "Brand_Key")]
    pub brand_key: String,
    #[serde(rename = "Product_Key")]
    pub product_key: String,
    #[serde(rename = "Online_Engagement_Key")]
    pub online_engagement_key: String,
}

/// One row of the `Affinity` extract, one per recognized behaviour entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AffinityRow {
    #[serde(rename = "Consumer_Key")]
    pub consumer_key: String,
    #[serde(rename = "Affinity_Key")]
    pub affinity_key: String,
    #[serde(rename = "Affinity_Category")]
    pub affinity_category: String,
    #[serde(rename = "Affinity_Subcategory")]
    pub affinity_subcategory: String,
    #[serde(rename = "Affinity_Value")]
    pub affinity_value: String,
    #[serde(rename = "Affinity_Type")]
    pub affinity_type: String,
    #[serde(rename = "Affinity_Score")]
    pub affinity_score: String,
    #[serde(rename = "Affinity_Last_Modified_Date")]
    pub affinity_last_modified_date: String,
}
