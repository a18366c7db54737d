use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tutorial {
    pub id: i32,
    pub title: String,
    pub author: Author,

    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl Tutorial {
    pub fn new(id: i32, title: impl Into<String>, author: Author) -> Self {
        Self {
            id,
            title: title.into(),
            author,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments.push(comment);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub name: String,

    /// Ids of tutorials written by this author. Not checked against the store.
    #[serde(default)]
    pub tutorials: Vec<i32>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tutorials: Vec::new(),
        }
    }

    pub fn with_tutorials(mut self, tutorials: Vec<i32>) -> Self {
        self.tutorials = tutorials;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub body: String,
}

impl Comment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
