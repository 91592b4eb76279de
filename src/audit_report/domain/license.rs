/// License attributes returned by the server's license lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LicenseDetails {
    pub spdx_identifier: Option<String>,
    pub short_name: Option<String>,
}

impl LicenseDetails {
    pub fn new(spdx_identifier: Option<String>, short_name: Option<String>) -> Self {
        Self {
            spdx_identifier,
            short_name,
        }
    }
}
