use proptest::prelude::*;

/// A label slot: either a text payload or nothing.
pub type Label = Option<String>;

pub fn arb_label() -> impl Strategy<Value = Label> {
    prop_oneof![Just(None), "[a-z]{1,6}".prop_map(Some)]
}
