use super::text_or;
use serde_json::Value;

/// Render the group report.
///
/// A `memberCount` of zero is a real value and renders as `0`; only an
/// absent count renders as `N/A`. The same rule applies to the group id.
#[must_use]
pub fn report(record: &Value) -> String {
    let group_id = record
        .get("id")
        .and_then(Value::as_u64)
        .map_or_else(|| "N/A".to_string(), |id| id.to_string());
    let name = text_or(record, "name", "No name available");
    let description = text_or(record, "description", "No description available");
    let member_count = record
        .get("memberCount")
        .and_then(Value::as_u64)
        .map_or_else(|| "N/A".to_string(), |count| count.to_string());
    let owner = record
        .get("owner")
        .and_then(|owner| owner.get("username"))
        .and_then(Value::as_str)
        .filter(|username| !username.trim().is_empty())
        .unwrap_or("No owner available");
    let publicity = if record
        .get("isPublic")
        .and_then(Value::as_bool)
        .unwrap_or(false)
    {
        "Public"
    } else {
        "Private"
    };

    format!(
        "**Group ID:** {group_id}\n\
         **Group Name:** {name}\n\
         **Description:** {description}\n\
         **Member Count:** {member_count}\n\
         **Owner:** {owner}\n\
         **Publicity:** {publicity}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_distinguishes_zero_members_from_absent() {
        let record = json!({
            "id": 42,
            "name": "Builders",
            "memberCount": 0,
            "isPublic": false
        });

        let report = report(&record);

        assert_eq!(
            report,
            "**Group ID:** 42\n\
             **Group Name:** Builders\n\
             **Description:** No description available\n\
             **Member Count:** 0\n\
             **Owner:** No owner available\n\
             **Publicity:** Private"
        );
    }

    #[test]
    fn report_renders_absent_member_count_as_na() {
        let record = json!({
            "id": 42,
            "name": "Builders"
        });

        assert!(report(&record).contains("**Member Count:** N/A"));
    }

    #[test]
    fn report_includes_owner_username() {
        let record = json!({
            "id": 7,
            "name": "Pilots",
            "memberCount": 120,
            "owner": { "username": "amelia" },
            "isPublic": true
        });

        let report = report(&record);

        assert!(report.contains("**Owner:** amelia"));
        assert!(report.contains("**Publicity:** Public"));
        assert!(report.contains("**Member Count:** 120"));
    }

    #[test]
    fn report_defaults_owner_without_username() {
        let record = json!({
            "id": 7,
            "name": "Pilots",
            "owner": {}
        });

        assert!(report(&record).contains("**Owner:** No owner available"));
    }

    #[test]
    fn report_defaults_every_field_on_empty_record() {
        let report = report(&json!({}));

        assert_eq!(
            report,
            "**Group ID:** N/A\n\
             **Group Name:** No name available\n\
             **Description:** No description available\n\
             **Member Count:** N/A\n\
             **Owner:** No owner available\n\
             **Publicity:** Private"
        );
    }
}
