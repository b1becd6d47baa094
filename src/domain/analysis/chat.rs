//! Keyword-routed chat responder

use std::fmt;

use serde::{Deserialize, Serialize};

use super::rules::{CHAT_TOPICS, ChatTopic, GENERIC_REPLY};

/// Coarse intent of a chat message, informational only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Question,
    Request,
    Greeting,
    Thanks,
    Unknown,
}

const INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::Question, &["什么", "如何", "怎么", "为什么", "哪里", "?", "？"]),
    (Intent::Request, &["我想", "我要", "请", "帮我", "能否"]),
    (Intent::Greeting, &["你好", "您好", "hello", "hi", "早上好", "下午好"]),
    (Intent::Thanks, &["谢谢", "感谢", "thank", "谢了"]),
];

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Question => "question",
            Self::Request => "request",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A reply together with how the message was understood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
    pub intent: Intent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

/// First intent group with a case-insensitive keyword hit
pub fn detect_intent(message: &str) -> Intent {
    let lowered = message.to_lowercase();

    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(&k.to_lowercase())))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::Unknown)
}

/// First topic in table order whose keywords occur in the message
pub fn match_topic(message: &str) -> Option<&'static ChatTopic> {
    CHAT_TOPICS
        .iter()
        .find(|topic| topic.keywords.iter().any(|k| message.contains(k)))
}

/// Answers a visitor message from the canned knowledge base
pub fn respond(message: &str) -> ChatReply {
    let intent = detect_intent(message);
    let topic = match_topic(message);

    let response = match topic {
        Some(topic) => topic.responses.join("\n"),
        None => GENERIC_REPLY.join("\n"),
    };

    ChatReply {
        response,
        intent,
        topic: topic.map(|t| t.name.to_string()),
    }
}

/// Reply text only
pub fn chat(message: &str) -> String {
    respond(message).response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuition_reply() {
        let reply = chat("学费多少钱？");
        assert!(reply.contains("学费"));
        assert!(reply.contains("400-123-4567"));
        assert_eq!(reply.lines().count(), 5);
    }

    #[test]
    fn test_topic_order() {
        // 招生 comes before 联系 in the knowledge base
        let reply = respond("请问招生咨询电话是多少");
        assert_eq!(reply.topic.as_deref(), Some("招生"));
        assert!(reply.response.starts_with("我校全年招生"));
    }

    #[test]
    fn test_generic_reply() {
        let reply = respond("random words");
        assert_eq!(reply.topic, None);
        assert!(reply.response.starts_with("感谢您对齐鲁国际学校的关注！"));
        assert!(reply.response.contains("info@qilu.edu.cn"));
        assert_eq!(chat(""), reply.response);
    }

    #[test]
    fn test_intent_detection() {
        assert_eq!(detect_intent("学校在哪里？"), Intent::Question);
        assert_eq!(detect_intent("我想报名"), Intent::Request);
        assert_eq!(detect_intent("HELLO there"), Intent::Greeting);
        assert_eq!(detect_intent("Thank you"), Intent::Thanks);
        assert_eq!(detect_intent("收到"), Intent::Unknown);
    }

    #[test]
    fn test_intent_does_not_change_reply() {
        assert_eq!(chat("你好，课程"), chat("课程"));
    }

    #[test]
    fn test_topic_keywords_are_case_sensitive() {
        // Topic keywords are Chinese; intent matching alone lower-cases
        assert_eq!(respond("Hi").topic, None);
        assert_eq!(respond("Hi").intent, Intent::Greeting);
    }

    #[test]
    fn test_intent_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Intent::Greeting).unwrap(), "\"greeting\"");
        assert_eq!(Intent::Thanks.to_string(), "thanks");
    }
}
