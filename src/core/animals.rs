//! Animal hierarchy with an overridden sound behavior
//!
//! Task 2 of the coursework set: a base animal with a generic sound, and a
//! dog that overrides the sound and adds a fetch capability of its own.
//! Overriding maps onto the [`Animal`] trait; `fetch` is an inherent method
//! on [`Dog`] only, so the base variant can never expose it.

/// Sound and info behavior shared by every animal
pub trait Animal {
    /// The animal's name, fixed at construction
    fn name(&self) -> &str;

    /// Produce the variant's sound; each implementor returns its own fixed
    /// string, independent of name or state
    fn make_sound(&self) -> String;

    /// Formatted description embedding the animal's name
    fn get_info(&self) -> String {
        format!("Animal: {}", self.name())
    }
}

/// Base variant: a plain animal with the generic sound
#[derive(Debug, Clone)]
pub struct GenericAnimal {
    name: String,
}

impl GenericAnimal {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Animal for GenericAnimal {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        "Some sound".to_string()
    }
}

/// Derived variant: overrides the sound and can fetch
#[derive(Debug, Clone)]
pub struct Dog {
    name: String,
}

impl Dog {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Fetch description embedding the dog's name; not part of [`Animal`]
    pub fn fetch(&self) -> String {
        format!("{} is fetching the ball", self.name)
    }
}

impl Animal for Dog {
    fn name(&self) -> &str {
        &self.name
    }

    fn make_sound(&self) -> String {
        "Woof!".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generic_animal_info_and_sound() {
        let animal = GenericAnimal::new("Generic");
        assert_eq!(animal.get_info(), "Animal: Generic");
        assert_eq!(animal.make_sound(), "Some sound");
    }

    #[test]
    fn test_dog_overrides_sound_and_inherits_info() {
        let dog = Dog::new("Buddy");
        assert_eq!(dog.make_sound(), "Woof!");
        assert_eq!(dog.get_info(), "Animal: Buddy");
    }

    #[test]
    fn test_dog_fetch_embeds_name() {
        let dog = Dog::new("Buddy");
        assert_eq!(dog.fetch(), "Buddy is fetching the ball");
    }

    #[test]
    fn test_sound_dispatches_dynamically() {
        let animals: Vec<Box<dyn Animal>> = vec![
            Box::new(GenericAnimal::new("Generic")),
            Box::new(Dog::new("Buddy")),
        ];

        let sounds: Vec<String> = animals.iter().map(|a| a.make_sound()).collect();
        assert_eq!(sounds, vec!["Some sound".to_string(), "Woof!".to_string()]);

        // get_info comes from the trait's provided body for both variants.
        assert_eq!(animals[0].get_info(), "Animal: Generic");
        assert_eq!(animals[1].get_info(), "Animal: Buddy");
    }

    #[test]
    fn test_sound_is_not_parameterized_by_name() {
        assert_eq!(
            GenericAnimal::new("A").make_sound(),
            GenericAnimal::new("B").make_sound()
        );
        assert_eq!(Dog::new("Rex").make_sound(), Dog::new("Buddy").make_sound());
    }
}
