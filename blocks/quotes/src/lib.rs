//! Quote session: composes the image, tag and item stores into the
//! operations the tagging UI performs, plus the read-only projections
//! (images with their tags, the invoice).

pub mod invoice;
pub mod session;
pub mod types;

pub use invoice::{format_currency, Invoice, InvoiceLine};
pub use session::QuoteSession;
pub use types::{ImageWithTags, Snapshot};
