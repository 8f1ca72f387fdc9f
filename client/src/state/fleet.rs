//! Fetched back-office lists: companies and devices.
//!
//! DESIGN
//! ======
//! Each list tracks its own `loading`/`error` so one failing endpoint does not
//! blank the other page. Filtering is plain data logic kept out of components.

#[cfg(test)]
#[path = "fleet_test.rs"]
mod fleet_test;

use crate::net::types::{Company, Device};

/// A fetched list plus its request status.
#[derive(Clone, Debug, PartialEq)]
pub struct ListState<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self { items: Vec::new(), loading: false, error: None }
    }
}

impl<T> ListState<T> {
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Store a finished request. Errors keep the previous items.
    pub fn finish(&mut self, result: Result<Vec<T>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FleetState {
    pub companies: ListState<Company>,
    pub devices: ListState<Device>,
}

impl FleetState {
    pub fn company_name(&self, tenant_id: i64) -> Option<&str> {
        self.companies
            .items
            .iter()
            .find(|c| c.id == tenant_id)
            .map(|c| c.name.as_str())
    }

    /// Devices whose name or external id contains `query`, ignoring case.
    /// A blank query matches everything.
    pub fn filter_devices(&self, query: &str) -> Vec<&Device> {
        let needle = query.trim().to_lowercase();
        self.devices
            .items
            .iter()
            .filter(|d| {
                needle.is_empty()
                    || d.name.to_lowercase().contains(&needle)
                    || d.external_id.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Device count per company, in company order. Companies without devices
    /// report zero; devices of unknown tenants are not counted.
    pub fn devices_per_company(&self) -> Vec<(&str, usize)> {
        self.companies
            .items
            .iter()
            .map(|c| {
                let count = self.devices.items.iter().filter(|d| d.tenant_id == c.id).count();
                (c.name.as_str(), count)
            })
            .collect()
    }
}
