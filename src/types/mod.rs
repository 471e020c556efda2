// ABOUTME: Small domain types shared by the runtime adapter and the health service.
// ABOUTME: Currently the container identifier newtype.

mod id;

pub use id::ContainerId;
