use anyhow::Result;
use owo_colors::OwoColorize;
use yinyang_core::Group;

use crate::render::GroupRender;

pub fn run(group: Group) -> Result<()> {
    let profile = group.profile();

    println!("{}", group.themed_name());
    println!("{}", profile.tagline.italic());
    println!();
    println!("{}", profile.about);
    println!();
    println!("Specialty: {}", profile.specialty);
    println!();
    println!("Instagram: {}", profile.instagram);
    println!("YouTube:   {}", profile.youtube);
    println!("Booking:   {}", group.booking_email());

    Ok(())
}
