//! Built-in category and animal content set.
//!
//! Reference data only; the quiz and progress logic never depend on the
//! concrete entries here. Categories past [`UNLOCK_CAP`](crate::UNLOCK_CAP)
//! are premium content: listed and shown as locked, with no unlock path.

use crate::model::{Animal, AnimalId, Category, CategoryId, UNLOCK_CAP};

fn animal(id: u32, name: &str, image: &str) -> Animal {
    Animal::new(AnimalId::new(id), name, image)
}

fn category(id: u32, name: &str, emoji: &str, animals: Vec<Animal>) -> Category {
    Category::new(
        CategoryId::new(id),
        name,
        emoji,
        id > UNLOCK_CAP,
        animals,
    )
    .expect("built-in category names are non-empty")
}

fn img(photo: &str) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w=300&h=300&fit=crop&auto=format&q=75")
}

/// All categories, ordered by id (ids are contiguous starting at 1).
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        category(
            1,
            "Farm Animals",
            "🐴",
            vec![
                animal(101, "Horse", &img("1553284965-83fd3e82fa5a")),
                animal(102, "Cow", &img("1546445317-29f4545e9d53")),
                animal(103, "Pig", &img("1516467508483-a7212febe31a")),
                animal(104, "Sheep", &img("1484557985045-edf25e08da73")),
                animal(105, "Goat", &img("1524024973431-2ad916746881")),
                animal(106, "Dog", &img("1543466835-00a7907e9de1")),
                animal(107, "Cat", &img("1514888286974-6c03e2ca1dba")),
                animal(108, "Chicken", &img("1548550023-2bdb3c5beed7")),
                animal(109, "Duck", &img("1459682687441-7761439a709d")),
                animal(110, "Rabbit", &img("1585110396000-c9ffd4e4b308")),
            ],
        ),
        category(
            2,
            "Wild Animals",
            "🦁",
            vec![
                animal(201, "Tiger", &img("1561731216-c3a4d99437d5")),
                animal(202, "Lion", &img("1546182990-dffeafbe841d")),
                animal(203, "Elephant", &img("1557050543-4d5f4e07ef46")),
                animal(204, "Bear", &img("1530595467537-0b5996c41f2d")),
                animal(205, "Wolf", &img("1564466809058-bf4114d55352")),
                animal(206, "Fox", &img("1474511320723-9a56873867b5")),
                animal(207, "Zebra", &img("1526095179574-86e545346ae6")),
                animal(208, "Giraffe", &img("1547721064-da6cfb341d50")),
                animal(209, "Deer", &img("1484362696523-4dbc7a8c2a66")),
                animal(210, "Kangaroo", &img("1526336024174-e58f5cdd8e13")),
            ],
        ),
        category(
            3,
            "Birds",
            "🦅",
            vec![
                animal(301, "Eagle", &img("1611689342806-0863700ce1e4")),
                animal(302, "Owl", &img("1543549790-8b5f4a028cfb")),
                animal(303, "Parrot", &img("1552728089-57bdde30beb3")),
                animal(304, "Penguin", &img("1551986782-d0169b3f8fa7")),
                animal(305, "Flamingo", &img("1497206365907-f5e630693df0")),
                animal(306, "Swan", &img("1535821265819-8e2ff6312cf7")),
                animal(307, "Woodpecker", &img("1589652717521-10c0d092dea9")),
                animal(308, "Ostrich", &img("1534759926787-89fa60f35848")),
                animal(309, "Peacock", &img("1456926631375-92c8ce872def")),
                animal(310, "Toucan", &img("1552727451-6f5671e14d83")),
            ],
        ),
        category(
            4,
            "Sea Animals",
            "🐋",
            vec![
                animal(401, "Whale", &img("1568430462989-44163eb1752f")),
                animal(402, "Dolphin", &img("1607153333879-c174d265f1d2")),
                animal(403, "Shark", &img("1560275619-4662e36fa65c")),
                animal(404, "Octopus", &img("1545671913-b89ac1b4ac10")),
                animal(405, "Seahorse", &img("1559827291-72ee739d0d9a")),
                animal(406, "Crab", &img("1510130387422-82bed34b37e9")),
                animal(407, "Turtle", &img("1437622368342-7a3d73a34c8f")),
                animal(408, "Jellyfish", &img("1530053969600-caed2596d242")),
                animal(409, "Seal", &img("1518709268805-4e9042af9f23")),
                animal(410, "Starfish", &img("1501436513145-30f24e19fcc8")),
            ],
        ),
        category(
            5,
            "Insects",
            "🐝",
            vec![
                animal(501, "Bee", &img("1568526381923-caf3fd520382")),
                animal(502, "Butterfly", &img("1452570053594-1b985d6ea890")),
                animal(503, "Ant", &img("1470167290877-7d5d3446de4c")),
                animal(504, "Ladybug", &img("1551154994-c5e6f6e9e0c4")),
                animal(505, "Dragonfly", &img("1506700805464-18b8b86cdc47")),
                animal(506, "Grasshopper", &img("1501856777240-e55de1105bd8")),
                animal(507, "Beetle", &img("1588964895597-cfccd6e2dbf9")),
                animal(508, "Snail", &img("1443688005183-32a0d4e4c1c3")),
                animal(509, "Caterpillar", &img("1470114716159-e389f8712fda")),
                animal(510, "Firefly", &img("1500829243541-74b677fecc30")),
            ],
        ),
        category(
            6,
            "Primates",
            "🐒",
            vec![
                animal(601, "Monkey", &img("1540573133985-87b6da6d54a9")),
                animal(602, "Gorilla", &img("1555371363-27a37f8e8c46")),
                animal(603, "Chimpanzee", &img("1554457945-ba5df6648602")),
                animal(604, "Orangutan", &img("1544985361-b420d7a77043")),
                animal(605, "Lemur", &img("1580691155297-f3b0a774b9e4")),
            ],
        ),
        category(
            7,
            "Safari",
            "🐪",
            vec![
                animal(701, "Camel", &img("1536431311719-398b6704d4cc")),
                animal(702, "Jaguar", &img("1517825738774-7de9363ef735")),
                animal(703, "Hippo", &img("1541014520194-a9e6498b1317")),
                animal(704, "Rhino", &img("1472550234474-b2d55b2ec0f6")),
                animal(705, "Antelope", &img("1484406566174-9da000fda645")),
            ],
        ),
        category(
            8,
            "Dinosaurs",
            "🦖",
            vec![
                animal(801, "T-Rex", &img("1606856110002-d0991ce78250")),
                animal(802, "Triceratops", &img("1569407228235-9a744831a090")),
                animal(803, "Stegosaurus", &img("1570481662006-a5a1b1f54846")),
                animal(804, "Velociraptor", &img("1601057836844-0d1b9c6cb1a7")),
            ],
        ),
    ]
}

/// Looks up one category by id.
#[must_use]
pub fn find(id: CategoryId) -> Option<Category> {
    categories().into_iter().find(|c| c.id() == id)
}
