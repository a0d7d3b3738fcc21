use serde::Serialize;

/// Board dimensions plus the run length needed to win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 6 rows, 7 columns, 4 in a row.
    #[default]
    Standard,
    /// 7 rows, 9 columns, 5 in a row.
    Large,
}

impl Variant {
    pub fn rows(self) -> usize {
        match self {
            Variant::Standard => 6,
            Variant::Large => 7,
        }
    }

    pub fn cols(self) -> usize {
        match self {
            Variant::Standard => 7,
            Variant::Large => 9,
        }
    }

    pub fn connect_n(self) -> usize {
        match self {
            Variant::Standard => 4,
            Variant::Large => 5,
        }
    }

    /// Map the `variant` form field ("4" or "5"). Anything else, including a
    /// missing field, selects the standard board.
    pub fn from_form_value(value: Option<&str>) -> Variant {
        match value.map(str::trim) {
            Some("5") => Variant::Large,
            _ => Variant::Standard,
        }
    }
}
