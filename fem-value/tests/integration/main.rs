mod properties;
mod scenario;
mod temporal;
#[cfg(feature = "serde")]
mod wire_json;
