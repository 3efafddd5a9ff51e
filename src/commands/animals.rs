use crate::cli::AnimalsArgs;
use crate::core::animals::{Animal, Dog, GenericAnimal};
use crate::utils::output::OutputStyle;
use anyhow::Result;

pub fn handle_animals_command(args: &AnimalsArgs) -> Result<()> {
    OutputStyle::print_header("🐾 Animal Hierarchy");

    let animal = GenericAnimal::new(args.animal.as_str());
    let dog = Dog::new(args.dog.as_str());

    print_animal(&animal);
    print_animal(&dog);
    println!("{}", OutputStyle::content(&dog.fetch()));

    Ok(())
}

// Info and sound go through the trait object so the overridden sound is
// selected by dynamic dispatch.
fn print_animal(animal: &dyn Animal) {
    println!("{}", OutputStyle::content(&animal.get_info()));
    println!("{}", OutputStyle::content(&animal.make_sound()));
}
