//! Report text for the document and chart collaborators.
//!
//! The core only produces text: employee details, the all-employee listing,
//! and payslips, plus page splitting for paginated output. Drawing and file
//! writing happen elsewhere.

mod documents;
mod pagination;

pub use documents::{
    LISTING_SEPARATOR, PAYSLIP_DATE_FORMAT, format_amount, format_employee_details,
    format_employee_listing, format_payslip,
};
pub use pagination::{DEFAULT_LINES_PER_PAGE, paginate};
