//! Build a flag set from an ordered list of names.

use flagmap::prelude::*;

fn main() {
    let mut fs = match FlagSet::from_names(["flag1", "flag2", "flag3"]) {
        Ok(fs) => fs,
        Err(e) => {
            println!("failed to build flag set: {e}");
            return;
        }
    };

    if let Err(e) = fs.set_by_name("flag1") {
        println!("failed to set flag: {e}");
    }
    match fs.has_by_name("flag1") {
        Ok(has) => println!("flag1 set: {has}"),
        Err(e) => println!("failed to check flag: {e}"),
    }

    if let Err(e) = fs.clear_by_name("flag1") {
        println!("failed to clear flag: {e}");
    }
    match fs.has_by_name("flag1") {
        Ok(has) => println!("flag1 set: {has}"),
        Err(e) => println!("failed to check flag: {e}"),
    }

    if let Err(e) = fs.toggle_by_name("flag2") {
        println!("failed to toggle flag: {e}");
    }
    println!("current flags: {:?}", fs.active_flags());

    if let Err(e) = fs.toggle_by_name("flag2") {
        println!("failed to toggle flag: {e}");
    }
    println!("current flags: {:?}", fs.active_flags());

    if let Err(e) = fs.set_by_name("flag4") {
        println!("failed to set flag: {e}");
    }
}
