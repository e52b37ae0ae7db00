use crate::model::Priority;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(rename = "task", alias = "description")]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) priority: Priority,
    #[serde(default)]
    pub(crate) done: bool,
    #[serde(with = "rfc3339")]
    pub(crate) created_at: OffsetDateTime,
    #[serde(
        default,
        with = "rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) completed_at: Option<OffsetDateTime>,
}

impl Task {
    pub(crate) fn new(description: String, priority: Priority, created_at: OffsetDateTime) -> Self {
        Self {
            description,
            priority,
            done: false,
            created_at,
            completed_at: None,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn completed_at(&self) -> Option<OffsetDateTime> {
        self.completed_at
    }
}

mod rfc3339 {
    use serde::{Deserialize, Deserializer, Serializer};
    use time::OffsetDateTime;
    use time::format_description::well_known::Rfc3339;

    pub fn serialize<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OffsetDateTime::parse(&raw, &Rfc3339).map_err(serde::de::Error::custom)
    }

    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};
        use time::OffsetDateTime;
        use time::format_description::well_known::Rfc3339;

        pub fn serialize<S>(value: &Option<OffsetDateTime>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(value) => {
                    let formatted = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
                    serializer.serialize_some(&formatted)
                }
                None => serializer.serialize_none(),
            }
        }

        /// Older files always carried `completed_at`, writing the zero time
        /// `0001-01-01T00:00:00Z` for open tasks. That value decodes as unset.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<OffsetDateTime>, D::Error>
        where
            D: Deserializer<'de>,
        {
            let Some(raw) = Option::<String>::deserialize(deserializer)? else {
                return Ok(None);
            };
            let parsed = OffsetDateTime::parse(&raw, &Rfc3339).map_err(serde::de::Error::custom)?;
            if parsed.year() <= 1 {
                return Ok(None);
            }
            Ok(Some(parsed))
        }
    }
}
