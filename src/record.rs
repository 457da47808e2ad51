// 🎭 Character Record - one catalog entry
// The JSON document keeps the catalog's original field names; the Rust side
// uses descriptive names.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// APPROXIMATE AGE
// ============================================================================

/// Display-only age. The catalog mixes numbers (`11`) and free text
/// (`"desconhecida"`), so both are kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApproximateAge {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for ApproximateAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApproximateAge::Number(n) => write!(f, "{}", n),
            ApproximateAge::Text(s) => f.write_str(s),
        }
    }
}

impl From<i32> for ApproximateAge {
    fn from(age: i32) -> Self {
        ApproximateAge::Number(age.into())
    }
}

impl From<&str> for ApproximateAge {
    fn from(age: &str) -> Self {
        ApproximateAge::Text(age.to_string())
    }
}

// ============================================================================
// RECORD
// ============================================================================

/// One character profile.
///
/// `name`, `title` and `description` are the searchable fields. The image is
/// optional; every other field is required and a missing one fails the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "nome")]
    pub name: String,

    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "idade_aproximada")]
    pub approximate_age: ApproximateAge,

    /// Absent, `null` and `""` all mean "no image"
    #[serde(rename = "imagem")]
    #[serde(default, deserialize_with = "empty_as_none")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// External reference URL
    pub link: String,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl Record {
    /// Build a record without an image
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        approximate_age: impl Into<ApproximateAge>,
        link: impl Into<String>,
    ) -> Self {
        Record {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            approximate_age: approximate_age.into(),
            image_url: None,
            link: link.into(),
        }
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        let url = image_url.into();
        self.image_url = if url.is_empty() { None } else { Some(url) };
        self
    }

    /// Alternative text for the card image
    pub fn image_alt(&self) -> String {
        format!("Imagem de {}", self.name)
    }

    /// Label shown above the name on every card
    pub fn age_label(&self) -> String {
        format!("Idade aproximada: {}", self.approximate_age)
    }
}

// ============================================================================
// TESTS
// ============================================================================
