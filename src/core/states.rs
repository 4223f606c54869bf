//! Indian state enumeration for GST place-of-supply classification.
//!
//! The state list is the closed set offered by the invoice form's
//! dropdowns. The two-digit codes are the GST state codes that prefix
//! every GSTIN.

use serde::{Deserialize, Serialize};

/// Indian state (28 entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum State {
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chhattisgarh,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    Jharkhand,
    Karnataka,
    Kerala,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
}

impl State {
    /// All states, in dropdown (alphabetical) order.
    pub const ALL: [State; 28] = [
        Self::AndhraPradesh,
        Self::ArunachalPradesh,
        Self::Assam,
        Self::Bihar,
        Self::Chhattisgarh,
        Self::Goa,
        Self::Gujarat,
        Self::Haryana,
        Self::HimachalPradesh,
        Self::Jharkhand,
        Self::Karnataka,
        Self::Kerala,
        Self::MadhyaPradesh,
        Self::Maharashtra,
        Self::Manipur,
        Self::Meghalaya,
        Self::Mizoram,
        Self::Nagaland,
        Self::Odisha,
        Self::Punjab,
        Self::Rajasthan,
        Self::Sikkim,
        Self::TamilNadu,
        Self::Telangana,
        Self::Tripura,
        Self::UttarPradesh,
        Self::Uttarakhand,
        Self::WestBengal,
    ];

    /// Display name as shown on the invoice.
    pub fn name(&self) -> &'static str {
        match self {
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::ArunachalPradesh => "Arunachal Pradesh",
            Self::Assam => "Assam",
            Self::Bihar => "Bihar",
            Self::Chhattisgarh => "Chhattisgarh",
            Self::Goa => "Goa",
            Self::Gujarat => "Gujarat",
            Self::Haryana => "Haryana",
            Self::HimachalPradesh => "Himachal Pradesh",
            Self::Jharkhand => "Jharkhand",
            Self::Karnataka => "Karnataka",
            Self::Kerala => "Kerala",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Maharashtra => "Maharashtra",
            Self::Manipur => "Manipur",
            Self::Meghalaya => "Meghalaya",
            Self::Mizoram => "Mizoram",
            Self::Nagaland => "Nagaland",
            Self::Odisha => "Odisha",
            Self::Punjab => "Punjab",
            Self::Rajasthan => "Rajasthan",
            Self::Sikkim => "Sikkim",
            Self::TamilNadu => "Tamil Nadu",
            Self::Telangana => "Telangana",
            Self::Tripura => "Tripura",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Uttarakhand => "Uttarakhand",
            Self::WestBengal => "West Bengal",
        }
    }

    /// Parse from the display name (exact match).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.name() == name)
    }

    /// GST state code — the two-digit prefix of a GSTIN registered
    /// in this state.
    pub fn gst_code(&self) -> u8 {
        match self {
            Self::AndhraPradesh => 37,
            Self::ArunachalPradesh => 12,
            Self::Assam => 18,
            Self::Bihar => 10,
            Self::Chhattisgarh => 22,
            Self::Goa => 30,
            Self::Gujarat => 24,
            Self::Haryana => 6,
            Self::HimachalPradesh => 2,
            Self::Jharkhand => 20,
            Self::Karnataka => 29,
            Self::Kerala => 32,
            Self::MadhyaPradesh => 23,
            Self::Maharashtra => 27,
            Self::Manipur => 14,
            Self::Meghalaya => 17,
            Self::Mizoram => 15,
            Self::Nagaland => 13,
            Self::Odisha => 21,
            Self::Punjab => 3,
            Self::Rajasthan => 8,
            Self::Sikkim => 11,
            Self::TamilNadu => 33,
            Self::Telangana => 36,
            Self::Tripura => 16,
            Self::UttarPradesh => 9,
            Self::Uttarakhand => 5,
            Self::WestBengal => 19,
        }
    }

    /// Parse from a GST state code.
    pub fn from_gst_code(code: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.gst_code() == code)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
