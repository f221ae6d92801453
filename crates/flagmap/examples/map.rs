//! Build a flag set from explicit name/bit definitions and resolve raw values.

use flagmap::prelude::*;

fn main() {
    let defs: Vec<(String, u32)> = (0..23).map(|i| (format!("flag{}", i + 1), 1 << i)).collect();
    let mut fs = FlagSet::from_map(defs.clone());

    if let Err(e) = fs.set_by_value(6) {
        println!("failed to set flags: {e}");
    }
    println!("current flags: {:?}", fs.active_names());

    match fs.has_any_by_name(["flag2"]) {
        Ok(has) => println!("has flag2: {has}"),
        Err(e) => println!("failed to check flag: {e}"),
    }
    match fs.has_all_by_name(["flag3"]) {
        Ok(has) => println!("has flag3: {has}"),
        Err(e) => println!("failed to check flag: {e}"),
    }
    println!("current flag value: {fs}");

    if let Err(e) = fs.toggle_by_name("flag2") {
        println!("failed to toggle flag: {e}");
    }
    println!("current flags: {:?}", fs.active_names());
    println!("current flag value: {fs}");

    if let Err(e) = fs.toggle_by_name("flag23") {
        println!("failed to toggle flag: {e}");
    }
    println!("current flags: {:?}", fs.active_names());
    println!("current flag value: {fs}");
    println!("current flag value int: {}", fs.value());

    let mut fs2 = FlagSet::from_map(defs);
    if let Err(e) = fs2.set_by_value(4_194_308) {
        println!("failed to set flags: {e}");
    }
    println!("current flags: {:?}", fs2.active_names());
    println!("current flag value: {fs2}");
    println!("current flag value int: {}", fs2.value());

    // Bit 24 has no definition; the value is rejected as a whole.
    if let Err(e) = fs2.set_by_value(1 << 23) {
        println!("failed to set flags: {e}");
    }
    println!("current flag value int: {}", fs2.value());
}
