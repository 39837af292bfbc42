use serde::{Deserialize, Deserializer, Serialize};

pub type PostID = i64;

pub const STORE_PATH: &str = "data/blog_posts.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    // missing ids count as 0 when picking the next one
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: PostID,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    // records written before likes existed don't carry the field
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,

    /// Keys this server doesn't know about, kept so a resave doesn't drop them
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The user-editable part of a post, as submitted by the add and update forms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostFields {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl PostFields {
    pub fn trimmed(self) -> PostFields {
        PostFields {
            author: self.author.trim().to_owned(),
            title: self.title.trim().to_owned(),
            content: self.content.trim().to_owned(),
        }
    }
}

impl Post {
    pub fn new(id: PostID, fields: PostFields) -> Post {
        let fields = fields.trimmed();
        Post {
            id,
            author: fields.author,
            title: fields.title,
            content: fields.content,
            likes: 0,
            extra: serde_json::Map::new(),
        }
    }

    pub fn set_fields(&mut self, fields: PostFields) {
        let fields = fields.trimmed();
        self.author = fields.author;
        self.title = fields.title;
        self.content = fields.content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_record_gets_zero_likes() {
        let post: Post =
            serde_json::from_str(r#"{"id": 4, "author": "A", "title": "T", "content": "C"}"#)
                .unwrap();
        assert_eq!(post.likes, 0);
        assert!(post.extra.is_empty());
    }

    #[test]
    fn null_fields_read_as_defaults() {
        let post: Post = serde_json::from_str(
            r#"{"id": -3, "author": null, "title": "T", "content": null, "likes": null}"#,
        )
        .unwrap();
        assert_eq!(post.id, -3);
        assert_eq!(post.author, "");
        assert_eq!(post.content, "");
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn unknown_keys_survive_a_resave() {
        let post: Post = serde_json::from_str(
            r#"{"id": 1, "author": "", "title": "", "content": "", "likes": 2, "tag": "x"}"#,
        )
        .unwrap();
        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(value["tag"], "x");
        assert_eq!(value["likes"], 2);
    }

    #[test]
    fn fields_are_trimmed_on_write() {
        let mut post = Post::new(
            1,
            PostFields {
                author: "  Ana ".into(),
                title: "\tHello\n".into(),
                content: " body ".into(),
            },
        );
        assert_eq!(post.author, "Ana");
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "body");
        assert_eq!(post.likes, 0);

        post.set_fields(PostFields {
            author: " ".into(),
            ..PostFields::default()
        });
        assert_eq!(post.author, "");
        assert_eq!(post.content, "");
    }
}
