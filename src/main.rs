use anyhow::Result;
use namecard::{build_display_name, ProfileEntry};

fn main() -> Result<()> {
    let short = build_display_name("Bob", None);
    let full = build_display_name("Bob", Some("Adams"));
    println!("{short}");
    println!("{full}");

    let owner = ProfileEntry::new("Xcat Liu", 25);
    println!("{}", owner.to_json()?);

    Ok(())
}
