// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Material assets.
//!
//! Prints the app bar tokens and renders the `airplay` icon at two sizes.
//!
//! Run:
//! - `cargo run -p understory_demos --example material_icon`

use kurbo::Shape;
use understory_material::app_bar::{self, AppBarThemeValues};
use understory_material::icon::{self, IconError, IconProps};

fn main() -> Result<(), IconError> {
    println!("== App bar tokens ==");
    for (name, value) in app_bar::TOKENS {
        println!("  {name}: {value}");
    }
    println!("== App bar theme values ==");
    for (name, value) in AppBarThemeValues::default().entries() {
        println!("  {name}: {value}");
    }

    let small = icon::airplay(IconProps::new())?;
    let props = IconProps::new().size(48.0).label("Cast to device");
    let large = icon::airplay(props)?;
    println!("== Icon bounds ==");
    println!("  24px: {:?}", small.scaled_path().bounding_box());
    println!("  48px: {:?}", large.scaled_path().bounding_box());
    println!("== Markup ==\n  {large}");
    Ok(())
}
