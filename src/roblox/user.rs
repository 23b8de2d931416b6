use super::text_or;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Render the user report.
///
/// Every optional field has a defined default, so rendering cannot fail once
/// a record has been decoded. `now` is the reference instant for the account
/// age.
#[must_use]
pub fn report(record: &Value, now: DateTime<Utc>) -> String {
    let username = record
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let display_name = record
        .get("displayName")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let description = text_or(record, "description", "No description available");

    let created = record
        .get("created")
        .and_then(Value::as_str)
        .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
        .map(|created| created.with_timezone(&Utc));

    let (created, age_days) = match created {
        Some(created) => (
            created.format("%Y-%m-%d").to_string(),
            (now - created).num_days().to_string(),
        ),
        None => ("N/A".to_string(), "N/A".to_string()),
    };

    let verified = if record
        .get("isVerified")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        "Yes"
    } else {
        "No"
    };

    let links = record
        .get("externalLinks")
        .and_then(Value::as_array)
        .map(|links| {
            links
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        })
        .filter(|joined| !joined.is_empty())
        .unwrap_or_else(|| "None".to_string());

    format!(
        "**Username:** {username}\n\
         **Display Name:** {display_name}\n\
         **Description:** {description}\n\
         **Created:** {created}\n\
         **Account Age (days):** {age_days}\n\
         **Is Verified:** {verified}\n\
         **External Links:** {links}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use chrono::TimeZone;
    use serde_json::json;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 3, 1, 12, 0, 0).single().unwrap()
    }

    #[test]
    fn report_applies_defaults_for_missing_fields() -> Result<()> {
        let record = json!({
            "name": "Alice",
            "displayName": "Alice W",
            "created": "2020-01-01T00:00:00Z",
            "isVerified": true
        });

        let report = report(&record, fixed_now());

        assert_eq!(
            report,
            "**Username:** Alice\n\
             **Display Name:** Alice W\n\
             **Description:** No description available\n\
             **Created:** 2020-01-01\n\
             **Account Age (days):** 60\n\
             **Is Verified:** Yes\n\
             **External Links:** None"
        );
        Ok(())
    }

    #[test]
    fn report_joins_links_in_order() {
        let record = json!({
            "name": "bob",
            "displayName": "Bob",
            "created": "2019-06-15T08:30:00Z",
            "externalLinks": ["https://example.com/a", "https://example.com/b"]
        });

        let report = report(&record, fixed_now());

        assert!(
            report.contains("**External Links:** https://example.com/a, https://example.com/b")
        );
        assert!(report.contains("**Is Verified:** No"));
    }

    #[test]
    fn report_treats_empty_links_as_none() {
        let record = json!({
            "name": "bob",
            "displayName": "Bob",
            "created": "2019-06-15T08:30:00Z",
            "externalLinks": []
        });

        assert!(report(&record, fixed_now()).contains("**External Links:** None"));
    }

    #[test]
    fn report_treats_null_description_as_missing() {
        let record = json!({
            "name": "bob",
            "displayName": "Bob",
            "created": "2019-06-15T08:30:00Z",
            "description": null
        });

        assert!(report(&record, fixed_now()).contains("**Description:** No description available"));
    }

    #[test]
    fn report_floors_partial_days() {
        // 2020-01-01 to the fixed instant is 60 days and 12 hours.
        let record = json!({
            "name": "carol",
            "displayName": "Carol",
            "created": "2020-01-01T00:00:00Z"
        });

        assert!(report(&record, fixed_now()).contains("**Account Age (days):** 60"));
    }

    #[test]
    fn report_parses_fractional_timestamps() {
        // The live API emits fractional seconds.
        let record = json!({
            "name": "erik",
            "displayName": "Erik",
            "created": "2006-02-27T21:06:40.3Z"
        });

        assert!(report(&record, fixed_now()).contains("**Created:** 2006-02-27"));
    }

    #[test]
    fn report_renders_unparsable_created_as_na() {
        let record = json!({
            "name": "dave",
            "displayName": "Dave",
            "created": "not a timestamp"
        });

        let report = report(&record, fixed_now());

        assert!(report.contains("**Created:** N/A"));
        assert!(report.contains("**Account Age (days):** N/A"));
    }
}
