//! Fuzz target for menu construction and rendering.
//!
//! Builds trees from arbitrary names and prices and checks that rendering
//! never panics and emits one line per node.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use patterns_rust::menu::{MenuCategory, MenuItem, MenuNode, RenderOptions};

#[derive(Arbitrary, Debug)]
struct Input {
    root: String,
    groups: Vec<(String, Vec<(String, f64)>)>,
    currency: String,
    precision: u8,
}

fuzz_target!(|input: Input| {
    let Ok(mut root) = MenuCategory::new(input.root) else {
        return;
    };
    for (name, items) in input.groups {
        let Ok(mut group) = MenuCategory::new(name) else {
            continue;
        };
        // Empty names and non-finite prices are rejected, not rendered
        group.add_all(
            items
                .into_iter()
                .filter_map(|(name, price)| MenuItem::new(name, price).ok()),
        );
        root.add(group);
    }

    let node = MenuNode::from(root);
    let options = RenderOptions::default()
        .with_currency(input.currency)
        .with_precision(usize::from(input.precision % 8));
    let mut out = Vec::new();
    node.render(&mut out, &options).expect("vec write");

    let lines = node.render_lines(&options);
    assert_eq!(lines.len(), node.leaf_count() + node.category_count());
});
