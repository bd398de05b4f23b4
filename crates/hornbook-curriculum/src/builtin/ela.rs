//! Builtin English Language Arts curriculum

use hornbook_core::{Difficulty, Example};

use crate::spec::{LessonSpec, ProblemSpec, SubjectSpec, TopicSpec};

/// Compact ELA set: reading and grammar
pub fn starter() -> SubjectSpec {
    SubjectSpec::new("English Language Arts")
        .with_description("Reading, writing, and the mechanics of language")
        .with_icon("📚")
        .with_topics([reading(), grammar()])
}

/// Full ELA set: starter plus writing and vocabulary
pub fn massive() -> SubjectSpec {
    let mut subject = starter();
    subject.topics.push(writing());
    subject.topics.push(vocabulary());
    subject
}

fn reading() -> TopicSpec {
    TopicSpec::new("Reading")
        .with_description("Understanding what a text says and means")
        .with_lessons([
            LessonSpec::new("Finding the Main Idea")
                .with_description("Telling the big point apart from the details")
                .with_teaching_steps([
                    "Ask what the whole passage is mostly about",
                    "Look at the first and last sentences for clues",
                    "Details are small facts that support the big point",
                    "Say the main idea in one sentence of your own",
                ])
                .with_examples([
                    Example::new("A passage about bees", "If every sentence tells something bees do to make honey, the main idea is how bees make honey."),
                ])
                .with_problems([
                    ProblemSpec::new("Is the main idea usually a small detail or the big point?", "The big point")
                        .with_solution_steps(["The main idea is what the whole text is mostly about"])
                        .with_hints(["Details support it, not the other way around"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("Where are good places to look for the main idea?", "The first and last sentences")
                        .with_solution_steps(["Writers often state the point up front and repeat it at the end"])
                        .with_hints(["Check the edges of the paragraph"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}

fn grammar() -> TopicSpec {
    TopicSpec::new("Grammar")
        .with_description("The parts of speech and how sentences work")
        .with_lessons([
            LessonSpec::new("Nouns and Verbs")
                .with_description("Naming words and action words")
                .with_teaching_steps([
                    "A noun names a person, place, or thing",
                    "A verb tells what someone or something does",
                    "Every complete sentence has at least one of each",
                    "Find the verb first, then ask who or what is doing it",
                ])
                .with_examples([
                    Example::new("The dog runs", "'Dog' is the noun doing the action. 'Runs' is the verb telling what it does."),
                ])
                .with_problems([
                    ProblemSpec::new("In 'The cat sleeps', which word is the verb?", "sleeps")
                        .with_solution_steps(["Find the action word", "'Sleeps' tells what the cat does"])
                        .with_hints(["Which word tells what is happening?"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("In 'My sister paints pictures', which words are nouns?", "sister and pictures")
                        .with_solution_steps(["'Sister' names a person", "'Pictures' names things"])
                        .with_hints(["Look for people, places, and things"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}

fn writing() -> TopicSpec {
    TopicSpec::new("Writing")
        .with_description("Putting ideas into clear sentences and paragraphs")
        .with_lessons([
            LessonSpec::new("Writing a Paragraph")
                .with_description("Topic sentence, supporting details, closing sentence")
                .with_teaching_steps([
                    "Start with a topic sentence that states the big idea",
                    "Add two or three sentences with supporting details",
                    "Finish with a closing sentence that wraps it up",
                    "Read it aloud to hear whether it flows",
                ])
                .with_examples([
                    Example::new("A paragraph about autumn", "Topic: 'Autumn is my favorite season.' Details about leaves, weather, and apples. Closing: 'That is why I wait for autumn all year.'"),
                ])
                .with_problems([
                    ProblemSpec::new("What sentence states the big idea of a paragraph?", "The topic sentence")
                        .with_solution_steps(["The topic sentence opens the paragraph and states its point"])
                        .with_hints(["It usually comes first"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What do the middle sentences of a paragraph do?", "Give supporting details")
                        .with_solution_steps(["The middle sentences back up the topic sentence with details"])
                        .with_hints(["They answer questions like why and how"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}

fn vocabulary() -> TopicSpec {
    TopicSpec::new("Vocabulary")
        .with_description("Building and decoding words")
        .with_lessons([
            LessonSpec::new("Prefixes and Suffixes")
                .with_description("Word parts that change meaning")
                .with_teaching_steps([
                    "A prefix attaches to the front of a word and changes its meaning",
                    "A suffix attaches to the end",
                    "'Un-' means not: unhappy means not happy",
                    "'-ful' means full of: joyful means full of joy",
                ])
                .with_examples([
                    Example::new("redo", "'Re-' means again, so redo means do again."),
                ])
                .with_problems([
                    ProblemSpec::new("What does 'unlock' mean?", "The opposite of lock")
                        .with_solution_steps(["'Un-' reverses the base word", "Unlock undoes locking"])
                        .with_hints(["'Un-' means not or reverse"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What does the suffix in 'hopeful' mean?", "Full of")
                        .with_solution_steps(["'-ful' means full of", "Hopeful means full of hope"])
                        .with_hints(["Look at the end of the word"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}
