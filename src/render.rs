use crate::blog::Post;
use std::fmt::Write;

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        escape(title)
    )
}

pub fn escape(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut output, c| {
        match c {
            '&' => output.push_str("&amp;"),
            '<' => output.push_str("&lt;"),
            '>' => output.push_str("&gt;"),
            '"' => output.push_str("&quot;"),
            '\'' => output.push_str("&#39;"),
            _ => output.push(c),
        }
        output
    })
}

// raw HTML inside a post is dropped by comrak's default options
fn markdown(content: &str) -> String {
    comrak::markdown_to_html(content, &comrak::Options::default())
}

pub fn index(posts: &[Post]) -> String {
    let mut body = String::from("<h1>Blog</h1>\n<p><a href=\"/add\">Add a post</a></p>\n");

    if posts.is_empty() {
        body.push_str("<p>No posts yet.</p>\n");
    }

    for post in posts {
        let _ = write!(
            body,
            "<article id=\"post-{id}\">\n<h2>{title}</h2>\n<p><em>by {author}</em></p>\n\
             {content}<p>{likes} \u{2764} \
             <a href=\"/like/{id}\">Like</a> \
             <a href=\"/update/{id}\">Edit</a> \
             <a href=\"/delete/{id}\">Delete</a></p>\n</article>\n",
            id = post.id,
            title = escape(&post.title),
            author = escape(&post.author),
            content = markdown(&post.content),
            likes = post.likes,
        );
    }

    page("Blog", &body)
}

fn post_form(action: &str, submit: &str, author: &str, title: &str, content: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <p><label>Author <input type=\"text\" name=\"author\" value=\"{}\"></label></p>\n\
         <p><label>Title <input type=\"text\" name=\"title\" value=\"{}\"></label></p>\n\
         <p><label>Content <textarea name=\"content\" rows=\"10\">{}</textarea></label></p>\n\
         <p><button type=\"submit\">{submit}</button> <a href=\"/\">Cancel</a></p>\n</form>\n",
        escape(author),
        escape(title),
        escape(content),
    )
}

pub fn add_form() -> String {
    let body = format!("<h1>Add a post</h1>\n{}", post_form("/add", "Add", "", "", ""));
    page("Add a post", &body)
}

pub fn update_form(post: &Post) -> String {
    let body = format!(
        "<h1>Edit post</h1>\n{}",
        post_form(
            &format!("/update/{}", post.id),
            "Save",
            &post.author,
            &post.title,
            &post.content,
        )
    );
    page("Edit post", &body)
}
