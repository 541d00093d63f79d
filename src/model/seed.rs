//! Built-in recipes used when no stored collection exists.

use super::recipe::Recipe;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The default collection. Each call generates fresh ids.
pub fn seed_recipes() -> Vec<Recipe> {
    vec![
        Recipe::new(
            "Classic Margherita Pizza",
            "A classic Italian pizza with fresh ingredients and vibrant flavors.",
            "Lunch",
            strings(&["Pizza dough", "Tomatoes", "Fresh mozzarella", "Basil", "Olive oil"]),
            strings(&[
                "Preheat your oven to its highest temperature.",
                "Roll out the pizza dough into your desired shape.",
                "Spread a thin layer of crushed tomatoes over the dough, leaving a border around the edges.",
                "Tear the fresh mozzarella into small pieces and distribute them evenly over the tomatoes.",
                "Sprinkle fresh basil leaves on top.",
                "Drizzle a bit of olive oil over the pizza.",
                "Bake on a preheated pizza stone or baking sheet until the crust is golden and the cheese is bubbly, about 10-12 minutes.",
                "Let it cool slightly before slicing.",
            ]),
            "pizza",
        ),
        Recipe::new(
            "Grilled Chicken Salad",
            "A refreshing and nutritious salad with grilled chicken and mixed greens.",
            "Lunch",
            strings(&[
                "Chicken breasts",
                "Mixed greens",
                "Cherry tomatoes",
                "Cucumbers",
                "Balsamic vinaigrette",
            ]),
            strings(&[
                "Grill the chicken breasts until cooked through.",
                "Wash and dry the greens, halve the tomatoes, and chop the cucumbers.",
                "Rest the chicken for a few minutes, then slice it.",
                "Toss the greens, tomatoes, and cucumbers in a large bowl.",
                "Top with the sliced chicken.",
                "Drizzle with the vinaigrette and toss gently.",
            ]),
            "chicken",
        ),
        Recipe::new(
            "Vegetable Stir-Fry",
            "A colorful and tasty stir-fry loaded with fresh vegetables and tofu.",
            "Dinner",
            strings(&[
                "Assorted vegetables",
                "Tofu",
                "Soy sauce",
                "Ginger",
                "Garlic",
                "Sesame oil",
            ]),
            strings(&[
                "Chop the vegetables into bite-sized pieces.",
                "Press the tofu and cut it into cubes.",
                "Heat sesame oil in a wok over medium-high heat.",
                "Add ginger and garlic and cook until fragrant.",
                "Stir-fry the tofu until golden.",
                "Add the vegetables and stir-fry until tender-crisp.",
                "Season with soy sauce and toss.",
                "Serve over steamed rice or noodles.",
            ]),
            "stir_fry",
        ),
        Recipe::new(
            "Homestyle Beef Stew",
            "A hearty and comforting beef stew perfect for cold days.",
            "Dinner",
            strings(&[
                "Beef stew meat",
                "Potatoes",
                "Carrots",
                "Onions",
                "Beef broth",
                "Thyme",
            ]),
            strings(&[
                "Season the beef with salt and pepper.",
                "Brown the beef on all sides in a large pot.",
                "Remove the beef and soften the onions.",
                "Add carrots and potatoes and stir for a few minutes.",
                "Return the beef and cover with broth.",
                "Add thyme and simmer on low heat for 1.5 to 2 hours.",
                "Serve with crusty bread.",
            ]),
            "beef",
        ),
        Recipe::new(
            "Caprese Salad",
            "A light and fresh Caprese salad with tomatoes, mozzarella, and basil.",
            "Lunch",
            strings(&[
                "Tomatoes",
                "Fresh mozzarella",
                "Basil",
                "Balsamic glaze",
                "Olive oil",
            ]),
            strings(&[
                "Slice the tomatoes and mozzarella into rounds.",
                "Arrange the slices on a plate, alternating and overlapping.",
                "Tuck basil leaves between the slices.",
                "Drizzle with balsamic glaze and olive oil.",
                "Season with salt and black pepper.",
            ]),
            "salad",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn seed_has_five_recipes_with_unique_ids() {
        let recipes = seed_recipes();
        let ids: HashSet<_> = recipes.iter().map(|r| r.id).collect();

        assert_eq!(recipes.len(), 5);
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn seed_has_no_blank_entries() {
        for recipe in seed_recipes() {
            assert_eq!(recipe.clone().without_blank_entries(), recipe);
            assert!(!recipe.instructions.is_empty());
        }
    }
}
