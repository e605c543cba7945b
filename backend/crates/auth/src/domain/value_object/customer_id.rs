pub use kernel::id::CustomerId;
