//! Host integration: turning parsers into a framework's argument types.

pub mod backend;
pub mod builder;

pub use backend::{
    ArgumentTypeDescriptor, ArgumentTypeHost, DescriptorBuilder, DescriptorHost,
    OpaqueArgumentTypeBuilder,
};
pub use builder::ArgumentTypes;
