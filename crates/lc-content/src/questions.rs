use lc_core::{Collection, CoreError};
use lc_core::entities::{Question, QuestionBank};

pub(crate) fn questions() -> Result<QuestionBank, CoreError> {
    QuestionBank::try_from_entries(
        Collection::Questions,
        [
            (
                "q1",
                Question::new(
                    "At what age are most children first enrolled in childcare?",
                    &["Under 2", "2 to 3", "4 to 5", "6 and above"],
                    "2 to 3",
                ),
            ),
            (
                "q2",
                Question::new(
                    "Which subject shows the largest gain from early reading at home?",
                    &["Mathematics", "Language", "Science", "Art"],
                    "Language",
                ),
            ),
            (
                "q3",
                Question::new(
                    "What share of young adults go on to tertiary education?",
                    &["About 1 in 10", "About 1 in 4", "About 1 in 2", "Almost all"],
                    "About 1 in 2",
                ),
            ),
            (
                "q4",
                Question::new(
                    "Which factor most predicts time parents spend with children?",
                    &["Work hours", "Income", "Housing type", "Car ownership"],
                    "Work hours",
                ),
            ),
            (
                "q5",
                Question::new(
                    "Which skill do employers expect AI to make more valuable?",
                    &["Rote data entry", "Critical thinking", "Manual filing", "Typing speed"],
                    "Critical thinking",
                ),
            ),
            (
                "q6",
                Question::new(
                    "Which habit is most linked to healthy ageing?",
                    &["Regular exercise", "Late nights", "Skipping meals", "Screen time"],
                    "Regular exercise",
                ),
            ),
            (
                "q7",
                Question::new(
                    "Which leisure activity do seniors report doing most often?",
                    &["Walking", "Gaming", "Skydiving", "Surfing"],
                    "Walking",
                ),
            ),
        ],
    )
}
