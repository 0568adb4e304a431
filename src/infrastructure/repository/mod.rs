pub mod inmemory;

pub use inmemory::project::InMemoryProjectStore;
pub use inmemory::room::InMemoryRoomRegistry;
