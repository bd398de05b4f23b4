//! Builtin Mathematics curriculum

use hornbook_core::{Difficulty, Example};

use crate::spec::{LessonSpec, ProblemSpec, SubjectSpec, TopicSpec};

/// Compact Mathematics set: addition and subtraction
pub fn starter() -> SubjectSpec {
    SubjectSpec::new("Mathematics")
        .with_description("Numbers, operations, and everyday problem solving")
        .with_icon("🔢")
        .with_topics([addition(), subtraction()])
}

/// Full Mathematics set: starter plus multiplication, division, fractions
pub fn massive() -> SubjectSpec {
    let mut subject = starter();
    subject.topics.push(multiplication());
    subject.topics.push(division());
    subject.topics.push(fractions());
    subject
}

fn addition() -> TopicSpec {
    TopicSpec::new("Addition")
        .with_description("Combining numbers to find a total")
        .with_lessons([
            LessonSpec::new("Adding within 20")
                .with_description("Single-digit sums using counting on")
                .with_teaching_steps([
                    "Start with the bigger number",
                    "Count up by the smaller number, one at a time",
                    "The number you land on is the sum",
                    "Check by counting up from the smaller number instead",
                ])
                .with_examples([
                    Example::new("8 + 5", "Start at 8, count up five: 9, 10, 11, 12, 13. So 8 + 5 = 13."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 7 + 6?", "13")
                        .with_solution_steps(["Start at 7", "Count up six: 8, 9, 10, 11, 12, 13"])
                        .with_hints(["Start from the bigger number"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is 9 + 8?", "17")
                        .with_solution_steps(["Start at 9", "Count up eight to reach 17"])
                        .with_hints(["9 + 8 is one less than 9 + 9"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is 14 + 5?", "19")
                        .with_solution_steps(["Start at 14", "Count up five: 15, 16, 17, 18, 19"])
                        .with_hints(["Only the ones digit changes"])
                        .with_difficulty(Difficulty::Easy),
                ]),
            LessonSpec::new("Two-Digit Addition")
                .with_description("Column addition with regrouping")
                .with_teaching_steps([
                    "Line up the numbers by place value",
                    "Add the ones column first",
                    "If the ones total ten or more, carry the ten to the tens column",
                    "Add the tens column, including any carry",
                ])
                .with_examples([
                    Example::new("24 + 38", "Ones: 4 + 8 = 12, write 2 carry 1. Tens: 2 + 3 + 1 = 6. Answer: 62."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 25 + 34?", "59")
                        .with_solution_steps(["Ones: 5 + 4 = 9", "Tens: 2 + 3 = 5", "Answer: 59"])
                        .with_hints(["No carrying needed here"])
                        .with_difficulty(Difficulty::Medium),
                    ProblemSpec::new("What is 47 + 36?", "83")
                        .with_solution_steps([
                            "Ones: 7 + 6 = 13, write 3 carry 1",
                            "Tens: 4 + 3 + 1 = 8",
                            "Answer: 83",
                        ])
                        .with_hints(["The ones add up past ten, so carry"])
                        .with_difficulty(Difficulty::Medium),
                    ProblemSpec::new("What is 58 + 67?", "125")
                        .with_solution_steps([
                            "Ones: 8 + 7 = 15, write 5 carry 1",
                            "Tens: 5 + 6 + 1 = 12",
                            "Answer: 125",
                        ])
                        .with_hints(["This one carries into the hundreds"])
                        .with_difficulty(Difficulty::Hard),
                ]),
        ])
}

fn subtraction() -> TopicSpec {
    TopicSpec::new("Subtraction")
        .with_description("Taking away and finding the difference")
        .with_lessons([
            LessonSpec::new("Subtracting within 20")
                .with_description("Single-digit differences using counting back")
                .with_teaching_steps([
                    "Start with the first number",
                    "Count back by the number being subtracted",
                    "The number you land on is the difference",
                    "Check by adding your answer to the subtracted number",
                ])
                .with_examples([
                    Example::new("15 - 7", "Start at 15, count back seven: 14, 13, 12, 11, 10, 9, 8. So 15 - 7 = 8."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 12 - 5?", "7")
                        .with_solution_steps(["Start at 12", "Count back five: 11, 10, 9, 8, 7"])
                        .with_hints(["Check: 7 + 5 should give 12"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is 16 - 9?", "7")
                        .with_solution_steps(["Take away 6 to reach 10", "Take away 3 more to reach 7"])
                        .with_hints(["Break the 9 into 6 and 3"])
                        .with_difficulty(Difficulty::Medium),
                    ProblemSpec::new("What is 18 - 6?", "12")
                        .with_solution_steps(["Start at 18", "Count back six to reach 12"])
                        .with_hints(["Only the ones digit changes"])
                        .with_difficulty(Difficulty::Easy),
                ]),
        ])
}

fn multiplication() -> TopicSpec {
    TopicSpec::new("Multiplication")
        .with_description("Repeated addition and times tables")
        .with_lessons([
            LessonSpec::new("Times Tables to 10")
                .with_description("Multiplication facts through 10 x 10")
                .with_teaching_steps([
                    "Multiplication is repeated addition: 3 x 4 means three groups of four",
                    "Skip-count to build each table",
                    "The order does not matter: 3 x 4 equals 4 x 3",
                    "Practice until the facts come without counting",
                ])
                .with_examples([
                    Example::new("6 x 7", "Skip-count by six seven times: 6, 12, 18, 24, 30, 36, 42."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 3 x 4?", "12")
                        .with_solution_steps(["Three groups of four: 4 + 4 + 4 = 12"])
                        .with_hints(["Skip-count by four three times"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is 7 x 8?", "56")
                        .with_solution_steps(["7 x 8 = 56"])
                        .with_hints(["5, 6, 7, 8: 56 = 7 x 8"])
                        .with_difficulty(Difficulty::Medium),
                    ProblemSpec::new("What is 9 x 6?", "54")
                        .with_solution_steps(["9 x 6 is 10 x 6 minus one 6", "60 - 6 = 54"])
                        .with_hints(["Use the tens fact and subtract"])
                        .with_difficulty(Difficulty::Medium),
                ]),
            LessonSpec::new("Multiplying by Tens")
                .with_description("Using place value to multiply round numbers")
                .with_teaching_steps([
                    "Multiply the non-zero digits first",
                    "Count the zeros in both factors",
                    "Attach that many zeros to the product",
                ])
                .with_examples([
                    Example::new("30 x 4", "3 x 4 = 12, one zero to attach: 30 x 4 = 120."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 20 x 3?", "60")
                        .with_solution_steps(["2 x 3 = 6", "Attach one zero: 60"])
                        .with_hints(["Multiply 2 x 3 first"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is 40 x 50?", "2000")
                        .with_solution_steps(["4 x 5 = 20", "Attach two zeros: 2000"])
                        .with_hints(["Count the zeros in both numbers"])
                        .with_difficulty(Difficulty::Hard),
                ]),
        ])
}

fn division() -> TopicSpec {
    TopicSpec::new("Division")
        .with_description("Splitting into equal groups")
        .with_lessons([
            LessonSpec::new("Division Facts")
                .with_description("Division as the reverse of multiplication")
                .with_teaching_steps([
                    "Division asks how many equal groups fit",
                    "Use the matching multiplication fact",
                    "12 ÷ 3 asks: three times what makes 12?",
                    "Check by multiplying your answer by the divisor",
                ])
                .with_examples([
                    Example::new("24 ÷ 6", "Six times what makes 24? 6 x 4 = 24, so 24 ÷ 6 = 4."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 15 ÷ 3?", "5")
                        .with_solution_steps(["Three times what makes 15?", "3 x 5 = 15, so the answer is 5"])
                        .with_hints(["Think of the threes table"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("What is 42 ÷ 7?", "6")
                        .with_solution_steps(["Seven times what makes 42?", "7 x 6 = 42, so the answer is 6"])
                        .with_hints(["Use the sevens table"])
                        .with_difficulty(Difficulty::Medium),
                ]),
            LessonSpec::new("Remainders")
                .with_description("What happens when groups do not split evenly")
                .with_teaching_steps([
                    "Find the biggest multiple of the divisor that fits",
                    "Subtract it from the starting number",
                    "Whatever is left is the remainder",
                    "The remainder is always smaller than the divisor",
                ])
                .with_examples([
                    Example::new("17 ÷ 5", "Biggest multiple of 5 inside 17 is 15, which is 5 x 3. 17 - 15 = 2. So 17 ÷ 5 = 3 remainder 2."),
                ])
                .with_problems([
                    ProblemSpec::new("What is 13 ÷ 4?", "3 remainder 1")
                        .with_solution_steps(["4 x 3 = 12 fits, 4 x 4 = 16 is too big", "13 - 12 = 1 left over"])
                        .with_hints(["How many fours fit inside 13?"])
                        .with_difficulty(Difficulty::Medium),
                    ProblemSpec::new("What is 29 ÷ 6?", "4 remainder 5")
                        .with_solution_steps(["6 x 4 = 24 fits, 6 x 5 = 30 is too big", "29 - 24 = 5 left over"])
                        .with_hints(["The remainder must stay under 6"])
                        .with_difficulty(Difficulty::Hard),
                ]),
        ])
}

fn fractions() -> TopicSpec {
    TopicSpec::new("Fractions")
        .with_description("Parts of a whole")
        .with_lessons([
            LessonSpec::new("Understanding Fractions")
                .with_description("Naming equal parts with numerators and denominators")
                .with_teaching_steps([
                    "The bottom number tells how many equal parts the whole is cut into",
                    "The top number tells how many of those parts you have",
                    "Equal parts matter: halves must be the same size",
                ])
                .with_examples([
                    Example::new("3/4 of a pizza", "Cut the pizza into 4 equal slices and take 3 of them. That is 3/4."),
                ])
                .with_problems([
                    ProblemSpec::new("A pie is cut into 8 equal slices and you eat 3. What fraction did you eat?", "3/8")
                        .with_solution_steps(["8 equal parts makes the denominator 8", "3 slices eaten makes the numerator 3"])
                        .with_hints(["Parts eaten over parts total"])
                        .with_difficulty(Difficulty::Easy),
                    ProblemSpec::new("Which is bigger, 1/2 or 1/3?", "1/2")
                        .with_solution_steps(["Cutting into fewer pieces makes each piece bigger", "Halves are bigger than thirds"])
                        .with_hints(["Picture the same pizza cut both ways"])
                        .with_difficulty(Difficulty::Medium),
                ]),
        ])
}
