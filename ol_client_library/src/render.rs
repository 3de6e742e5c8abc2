use std::fmt;

/// A response body prepared for printing
#[derive(Debug, Clone, PartialEq)]
pub enum RenderedBody {
    /// Parsed JSON, printed with 2-space indentation
    Json(serde_json::Value),
    /// Printed exactly as received
    Raw(String),
}

impl RenderedBody {
    /// Best-effort parse: only asked-for pretty printing of valid JSON leaves the text form
    pub fn new(text: &str, pretty: bool) -> Self {
        if pretty {
            if let Ok(value) = serde_json::from_str::<serde_json::Value>(text) {
                return RenderedBody::Json(value);
            }
        }
        RenderedBody::Raw(text.to_string())
    }
}

impl fmt::Display for RenderedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderedBody::Json(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            },
            RenderedBody::Raw(text) => f.write_str(text),
        }
    }
}
