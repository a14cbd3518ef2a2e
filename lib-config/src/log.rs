pub use tracing::{debug, warn};
