//! Built-in sample catalog.

use super::Product;

/// `(id, name, brand)` rows of the sample catalog, in catalog order.
const SAMPLE_ROWS: &[(&str, &str, Option<&str>)] = &[
    ("688d8ae93054eeaac26b0ad5", "Pulpa hidratante para manos castaña", Some("Ekos")),
    ("688d8aea3054eeaac26b0ad6", "Kaiak Oceano Masculino 100 ml", Some("Kaiak")),
    ("688d8aeb3054eeaac26b0ad7", "Corrector cobertura extrema", Some("Una")),
    ("688d8aec3054eeaac26b0ad8", "Meu Primeiro Humor eau de toilette femenina", Some("Humor")),
    ("688d8aee3054eeaac26b0ad9", "Natura Homem eau de parfum masculino", Some("Homem")),
    ("688d8af03054eeaac26b0adb", "Protector aclarador de manchas FPS 50", Some("Chronos Derma")),
    ("688d8af33054eeaac26b0add", "Crema Nutritiva para Cuerpo", Some("Tododia")),
    ("688d8af53054eeaac26b0adf", "Kriska eau de toilette femenina Shock", Some("Kriska")),
    ("688da20eeeee72acc43a2f48", "iPhone 15 Pro", None),
    ("688da20eeeee72acc43a2f49", "Men's T-Shirt", None),
];

/// The sample products used when no catalog file is given.
pub fn sample_products() -> Vec<Product> {
    SAMPLE_ROWS
        .iter()
        .map(|(id, name, brand)| Product::new(*id, *name, *brand))
        .collect()
}
