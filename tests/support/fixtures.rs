// tests/support/fixtures.rs
//! Seed data shared by every integration test: 3 topics, 4 users,
//! 12 articles and 18 comments.
use chrono::{DateTime, TimeZone, Utc};
use nc_news::domain::article::{Article, ArticleId};
use nc_news::domain::comment::{Comment, CommentId};
use nc_news::domain::topic::{Topic, TopicSlug};
use nc_news::domain::user::{User, Username};

pub const IMG_URL: &str =
    "https://images.pexels.com/photos/158651/news-newsletter-newspaper-information-158651.jpeg?w=700&h=700";

pub fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn topics() -> Vec<Topic> {
    [
        ("mitch", "The man, the Mitch, the legend"),
        ("cats", "Not dogs"),
        ("paper", "what books are made of"),
    ]
    .into_iter()
    .map(|(slug, description)| Topic {
        slug: TopicSlug::new(slug).unwrap(),
        description: description.into(),
    })
    .collect()
}

pub fn users() -> Vec<User> {
    [
        (
            "butter_bridge",
            "jonny",
            "https://www.healthytherapies.com/wp-content/uploads/2016/06/Lime3.jpg",
        ),
        (
            "icellusedkars",
            "sam",
            "https://avatars2.githubusercontent.com/u/24604688?s=460&v=4",
        ),
        (
            "rogersop",
            "paul",
            "https://avatars2.githubusercontent.com/u/24394918?s=400&v=4",
        ),
        (
            "lurker",
            "do_nothing",
            "https://www.golenbock.com/wp-content/uploads/2015/01/placeholder-user.png",
        ),
    ]
    .into_iter()
    .map(|(username, name, avatar_url)| User {
        username: Username::new(username).unwrap(),
        name: name.into(),
        avatar_url: avatar_url.into(),
    })
    .collect()
}

fn article(
    id: i32,
    title: &str,
    topic: &str,
    author: &str,
    body: &str,
    created_at: DateTime<Utc>,
    votes: i32,
) -> Article {
    Article {
        id: ArticleId::new(id),
        title: title.into(),
        topic: TopicSlug::new(topic).unwrap(),
        author: Username::new(author).unwrap(),
        body: body.into(),
        created_at,
        votes,
        article_img_url: IMG_URL.into(),
    }
}

#[rustfmt::skip]
pub fn articles() -> Vec<Article> {
    vec![
        article(1, "Living in the shadow of a great man", "mitch", "butter_bridge", "I find this existence challenging", at(2020, 7, 9, 20, 11), 100),
        article(2, "Sony Vaio; or, The Laptop", "mitch", "icellusedkars", "Call me Mitchell.", at(2020, 10, 16, 5, 3), 0),
        article(3, "Eight pug gifs that remind me of mitch", "mitch", "icellusedkars", "some gifs", at(2020, 11, 3, 9, 12), 0),
        article(4, "Student SUES Mitch!", "mitch", "rogersop", "We all love Mitch and his wonderful, unique typing style.", at(2020, 5, 6, 1, 14), 0),
        article(5, "UNCOVERED: catspiracy to bring down democracy", "cats", "rogersop", "Bastet walks amongst us, and the cats are taking arms!", at(2020, 8, 3, 13, 14), 0),
        article(6, "A", "mitch", "icellusedkars", "Delicious tin of cat food", at(2020, 10, 18, 1, 0), 0),
        article(7, "Z", "mitch", "icellusedkars", "I was hungry.", at(2020, 1, 7, 14, 8), 0),
        article(8, "Does Mitch predate civilisation?", "mitch", "icellusedkars", "Archaeologists have uncovered a gigantic statue.", at(2020, 4, 17, 1, 8), 0),
        article(9, "They're not exactly dogs, are they?", "mitch", "butter_bridge", "Well? Think about it.", at(2020, 6, 6, 9, 10), 0),
        article(10, "Seven inspirational thought leaders from Manchester UK", "mitch", "rogersop", "Who are we kidding, there is only one, and it's Mitch!", at(2020, 5, 14, 4, 15), 0),
        article(11, "Am I a cat?", "mitch", "icellusedkars", "Having run out of ideas for articles, I am staring at the wall.", at(2020, 1, 15, 22, 21), 0),
        article(12, "Moustache", "mitch", "butter_bridge", "Have you seen the size of that thing?", at(2020, 10, 11, 11, 24), 0),
    ]
}

fn comment(
    id: i32,
    article_id: i32,
    author: &str,
    body: &str,
    votes: i32,
    created_at: DateTime<Utc>,
) -> Comment {
    Comment {
        id: CommentId::new(id),
        article_id: ArticleId::new(article_id),
        author: Username::new(author).unwrap(),
        body: body.into(),
        votes,
        created_at,
    }
}

#[rustfmt::skip]
pub fn comments() -> Vec<Comment> {
    vec![
        comment(1, 9, "butter_bridge", "Oh, I've got compassion running out of my nose, pal!", 16, at(2020, 4, 6, 12, 17)),
        comment(2, 1, "butter_bridge", "The beautiful thing about treasure is that it exists.", 14, at(2020, 10, 31, 3, 3)),
        comment(3, 1, "icellusedkars", "Replacing the quiet elegance of the dark suit and tie.", 100, at(2020, 3, 1, 1, 13)),
        comment(4, 1, "icellusedkars", "I carry a log - yes. Is it funny to you?", -100, at(2020, 2, 23, 12, 1)),
        comment(5, 1, "icellusedkars", "I hate streaming noses", 0, at(2020, 11, 3, 21, 0)),
        comment(6, 1, "icellusedkars", "I hate streaming eyes even more", 0, at(2020, 4, 11, 21, 2)),
        comment(7, 1, "icellusedkars", "Lobster pot", 0, at(2020, 5, 15, 20, 19)),
        comment(8, 1, "icellusedkars", "Delicious crackerbreads", 0, at(2020, 4, 14, 20, 19)),
        comment(9, 1, "icellusedkars", "Superficially charming", 0, at(2020, 1, 1, 3, 8)),
        comment(10, 3, "icellusedkars", "git push origin master", 0, at(2020, 6, 20, 7, 24)),
        comment(11, 3, "icellusedkars", "Ambidextrous marsupial", 0, at(2020, 9, 19, 23, 10)),
        comment(12, 1, "icellusedkars", "Massive intercranial brain haemorrhage", 0, at(2020, 3, 2, 7, 10)),
        comment(13, 1, "icellusedkars", "Fruit pastilles", 0, at(2020, 6, 15, 10, 25)),
        comment(14, 5, "icellusedkars", "What do you see? I have no idea where this will lead us.", 16, at(2020, 6, 9, 5, 0)),
        comment(15, 5, "butter_bridge", "I am 100% sure that we're not completely sure.", 1, at(2020, 11, 24, 0, 8)),
        comment(16, 6, "butter_bridge", "This is a bad article name", 1, at(2020, 10, 11, 15, 23)),
        comment(17, 9, "icellusedkars", "The owls are not what they seem.", 20, at(2020, 3, 14, 17, 2)),
        comment(18, 1, "butter_bridge", "This morning, I showered for nine minutes.", 16, at(2020, 7, 21, 0, 20)),
    ]
}
