use crate::model::{Author, Comment, Tutorial};

/// The fixed dataset served by the tutorial example.
pub fn sample_tutorials() -> Vec<Tutorial> {
    let author = Author::new("osi").with_tutorials(vec![1]);

    vec![
        Tutorial::new(1, "Go Graphql Tutorial", author).with_comments(vec![
            Comment::new("First comment"),
            Comment::new("Second comment"),
        ]),
    ]
}
