//! Vendor status updates supplied by investigation workflows outside
//! the core. The core defines no transition rules of its own here.

use super::DeskStore;
use crate::error::{DeskError, DeskResult};
use crate::model::{Vendor, VendorStatus};
use chrono::{DateTime, Utc};

impl DeskStore {
    pub fn set_vendor_status(
        &mut self,
        vendor_id: &str,
        status: VendorStatus,
        at: DateTime<Utc>,
    ) -> DeskResult<&Vendor> {
        let vendor = self
            .vendors
            .iter_mut()
            .find(|v| v.id == vendor_id)
            .ok_or_else(|| DeskError::not_found("vendor", vendor_id))?;

        vendor.status = status;
        vendor.last_activity = at;
        log::info!("vendor {vendor_id}: status -> {status:?}");
        Ok(&*vendor)
    }
}
