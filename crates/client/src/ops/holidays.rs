use payroll_schema::scalars::Date;
use payroll_schema::tables::Holiday;
use serde::{Deserialize, Serialize};

use crate::operation::operation;

operation!(
    /// Public holidays of one country between two dates, inclusive.
    GetHolidays,
    Query,
    get_holidays,
    concat!(
        include_str!("../../graphql/operations/holidays/get_holidays.graphql"),
        include_str!("../../graphql/fragments/holiday_fields.graphql"),
    ),
);

pub mod get_holidays {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Variables {
        pub country_code: String,
        pub from: Date,
        pub to: Date,
    }

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    pub struct ResponseData {
        pub holidays: Vec<Holiday>,
    }

    impl ResponseData {
        /// Holidays observed in `region`, national ones included.
        pub fn for_region<'a>(&'a self, region: &'a str) -> impl Iterator<Item = &'a Holiday> + 'a {
            self.holidays.iter().filter(move |h| h.applies_to(region))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn regional_filter_keeps_national_holidays() {
        let data: get_holidays::ResponseData = serde_json::from_value(json!({
            "holidays": [
                {
                    "id": "6f1c2b1e-7a0d-4c57-9d7a-3b0f1e2d4c5b",
                    "date": "2024-01-26",
                    "localName": "Australia Day",
                    "name": "Australia Day",
                    "countryCode": "AU",
                    "region": null,
                    "createdAt": null
                },
                {
                    "id": "0b7d0c39-9a38-4c1a-9b2e-5b8f7f0d1a22",
                    "date": "2024-03-11",
                    "localName": "Labour Day",
                    "name": "Labour Day",
                    "countryCode": "AU",
                    "region": ["AU-VIC"],
                    "createdAt": null
                }
            ]
        }))
        .unwrap();

        let nsw: Vec<_> = data.for_region("AU-NSW").map(|h| h.name.as_str()).collect();
        assert_eq!(nsw, vec!["Australia Day"]);
        assert_eq!(data.for_region("AU-VIC").count(), 2);
    }
}
