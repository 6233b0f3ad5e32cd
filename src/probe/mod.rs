pub mod discovery;
pub mod iftype;
pub mod interfaces;
pub mod reply;
pub mod selection;
pub mod walker;

pub use discovery::InterfaceDiscovery;
pub use interfaces::CheckNetworkInterfaces;
pub use reply::{CheckReply, HelperReply};
pub use walker::{SnmpTableWalker, TableWalker};
