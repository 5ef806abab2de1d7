mod interface_test;
pub(crate) mod util;
