//! Builtin Science curriculum

use hornbook_core::{Difficulty, Example};

use crate::spec::{LessonSpec, ProblemSpec, SubjectSpec, TopicSpec};

/// Compact Science set: life and earth science
pub fn starter() -> SubjectSpec {
    SubjectSpec::new("Science")
        .with_description("Observing and explaining the natural world")
        .with_icon("🔬")
        .with_topics([life_science(), earth_science()])
}

/// Full Science set: starter plus physical science and space
pub fn massive() -> SubjectSpec {
    let mut subject = starter();
    subject.topics.push(physical_science());
    subject.topics.push(space());
    subject
}

fn life_science() -> TopicSpec {
    TopicSpec::new("Life Science")
        .with_description("Living things and how they grow")
        .with_lessons([
            LessonSpec::new("Plant Life Cycles")
                .with_description("From seed to flower and back to seed")
                .with_teaching_steps([
                    "A seed sprouts when it gets water and warmth",
                    "The seedling grows roots down and a stem up",
                    "The adult plant makes flowers",
                    "Flowers make new seeds and the cycle starts again",
                ])
                .with_examples([
                    Example::new("Bean plant", "A bean seed sprouts in about a week, grows into a vine, flowers, and grows new bean pods full of seeds."),
                ])
                .with_problems([
                    ProblemSpec::new("What does a seed need to sprout?", "Water and warmth")
                        .with_solution_steps(["Seeds wait until conditions are right", "Water and warmth start the sprouting"])
                        .with_hints(["Think about when you plant in spring"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What part of the plant makes new seeds?", "The flower")
                        .with_solution_steps(["Flowers are the plant's seed factories"])
                        .with_hints(["It is the most colorful part"])
                        .with_difficulty(Difficulty::Easy),
                ]),
        ])
}

fn earth_science() -> TopicSpec {
    TopicSpec::new("Earth Science")
        .with_description("Weather, water, and the planet we live on")
        .with_lessons([
            LessonSpec::new("The Water Cycle")
                .with_description("How water moves between sky, land, and sea")
                .with_teaching_steps([
                    "The sun heats water and it evaporates into vapor",
                    "Vapor rises, cools, and condenses into clouds",
                    "Water falls back down as rain or snow",
                    "Rivers carry the water back to the sea",
                ])
                .with_examples([
                    Example::new("A puddle after rain", "The puddle shrinks on a sunny day because the water evaporates into the air."),
                ])
                .with_problems([
                    ProblemSpec::new("What is it called when water vapor turns into clouds?", "Condensation")
                        .with_solution_steps(["Vapor cools as it rises", "Cool vapor condenses into droplets that form clouds"])
                        .with_hints(["The same thing happens on a cold glass"])
                        .with_difficulty(Difficulty::Medium),
                    ProblemSpec::new("What powers the water cycle?", "The sun")
                        .with_solution_steps(["The sun's heat drives evaporation, which starts the cycle"])
                        .with_hints(["What dries up the puddles?"])
                        .with_difficulty(Difficulty::Easy),
                ]),
        ])
}

fn physical_science() -> TopicSpec {
    TopicSpec::new("Physical Science")
        .with_description("Matter, energy, and forces")
        .with_lessons([
            LessonSpec::new("States of Matter")
                .with_description("Solids, liquids, and gases")
                .with_teaching_steps([
                    "Solids keep their own shape",
                    "Liquids take the shape of their container",
                    "Gases spread out to fill all the space they can",
                    "Heating and cooling move matter between states",
                ])
                .with_examples([
                    Example::new("Water in three states", "Ice is solid water, the water you drink is liquid, and steam is water as a gas."),
                ])
                .with_problems([
                    ProblemSpec::new("What state of matter keeps its own shape?", "Solid")
                        .with_solution_steps(["Only solids hold their shape without a container"])
                        .with_hints(["Think of an ice cube on a plate"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What happens to ice when it is heated?", "It melts into liquid water")
                        .with_solution_steps(["Heat changes a solid to a liquid", "Melting ice becomes water"])
                        .with_hints(["What is in your glass after the ice is gone?"])
                        .with_difficulty(Difficulty::Easy),
                ]),
            LessonSpec::new("Forces and Motion")
                .with_description("Pushes, pulls, and why things move")
                .with_teaching_steps([
                    "A force is a push or a pull",
                    "Bigger forces make bigger changes in motion",
                    "Friction is a force that slows sliding things down",
                    "Gravity pulls everything toward the ground",
                ])
                .with_examples([
                    Example::new("Sliding a book", "Push a book across a table and it slows to a stop. Friction between book and table does that."),
                ])
                .with_problems([
                    ProblemSpec::new("What force pulls a dropped ball toward the ground?", "Gravity")
                        .with_solution_steps(["Gravity pulls objects toward the Earth"])
                        .with_hints(["It is the same force that keeps you on the floor"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What force slows a sled on flat snow?", "Friction")
                        .with_solution_steps(["Surfaces rubbing together create friction", "Friction slows the sled until it stops"])
                        .with_hints(["It happens wherever surfaces rub"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}

fn space() -> TopicSpec {
    TopicSpec::new("Space")
        .with_description("The solar system and beyond")
        .with_lessons([
            LessonSpec::new("The Solar System")
                .with_description("The sun and the eight planets")
                .with_teaching_steps([
                    "The sun is a star at the center of the solar system",
                    "Eight planets orbit the sun",
                    "The four inner planets are rocky, the four outer ones are giant",
                    "A year is one full trip around the sun",
                ])
                .with_examples([
                    Example::new("Order of the planets", "Mercury, Venus, Earth, Mars, Jupiter, Saturn, Uranus, Neptune."),
                ])
                .with_problems([
                    ProblemSpec::new("What is at the center of the solar system?", "The sun")
                        .with_solution_steps(["Every planet orbits the sun at the center"])
                        .with_hints(["It is the only star in the system"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("Which planet is third from the sun?", "Earth")
                        .with_solution_steps(["Count outward: Mercury, Venus, Earth"])
                        .with_hints(["You live on it"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is the largest planet?", "Jupiter")
                        .with_solution_steps(["Jupiter is the biggest of the four gas giants"])
                        .with_hints(["It is the first of the outer planets"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}
