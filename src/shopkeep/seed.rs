//! The built-in product set used when the durable slot is empty or unreadable.

use crate::model::{Product, ProductId};
use chrono::DateTime;

struct SeedEntry {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: f64,
    image: &'static str,
    created: i64,
}

const SEED: &[SeedEntry] = &[
    SeedEntry {
        id: "seed-01",
        name: "Ceramic Mug",
        description: "Stoneware mug, 350 ml, dishwasher safe.",
        price: 12.5,
        image: "https://picsum.photos/seed/mug/200",
        created: 1_704_103_200,
    },
    SeedEntry {
        id: "seed-02",
        name: "Linen Tea Towel",
        description: "Natural linen, 50 x 70 cm.",
        price: 9.0,
        image: "https://picsum.photos/seed/towel/200",
        created: 1_704_708_000,
    },
    SeedEntry {
        id: "seed-03",
        name: "Oak Cutting Board",
        description: "Solid oak board with juice groove.",
        price: 34.0,
        image: "https://picsum.photos/seed/board/200",
        created: 1_705_312_800,
    },
    SeedEntry {
        id: "seed-04",
        name: "Brass Desk Lamp",
        description: "Adjustable arm, warm white bulb included.",
        price: 79.99,
        image: "https://picsum.photos/seed/lamp/200",
        created: 1_706_176_800,
    },
    SeedEntry {
        id: "seed-05",
        name: "Wool Throw",
        description: "Merino wool blanket for the sofa.",
        price: 65.0,
        image: "https://picsum.photos/seed/throw/200",
        created: 1_707_040_800,
    },
    SeedEntry {
        id: "seed-06",
        name: "Glass Carafe",
        description: "Borosilicate carafe with cork stopper, 1 litre.",
        price: 22.0,
        image: "https://picsum.photos/seed/carafe/200",
        created: 1_707_904_800,
    },
    SeedEntry {
        id: "seed-07",
        name: "Bamboo Tray",
        description: "",
        price: 18.75,
        image: "https://picsum.photos/seed/tray/200",
        created: 1_708_768_800,
    },
];

/// Returns a fresh copy of the seed collection, in insertion order.
pub fn seed_products() -> Vec<Product> {
    SEED.iter()
        .map(|entry| Product {
            id: ProductId::from(entry.id),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            price: entry.price,
            image: entry.image.to_string(),
            creation_date: DateTime::from_timestamp(entry.created, 0).unwrap_or_default(),
        })
        .collect()
}
