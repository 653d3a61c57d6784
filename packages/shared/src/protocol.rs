//! Wire format of the frames pushed by the GuessMe game server.
//!
//! The server answers every text frame it receives with one JSON object:
//!
//! ```text
//! {"type": "answer",   "message": <welcome text>, "response": <secret noun>}
//! {"type": "question", "input": <question>, "response": <bool>, "message": <text>}
//! {"type": "guess",    "input": <guessed noun>, "response": <bool>, "message": <text>}
//! {"type": "invalid",  "message": <text>}
//! ```
//!
//! Nothing beyond "is valid JSON" is enforced. Missing fields decode as
//! [`Value::Null`], and values keep their JSON type (`response` is usually a
//! boolean).

use serde_json::Value;

/// Category of a frame, taken from its `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Reply to a yes/no question
    Question,
    /// Reply to an attempt at the answer
    Guess,
    /// Welcome message of a new game
    Answer,
    /// Input rejected by the server
    Invalid,
    /// Missing, non-string, or unknown `type`
    Other,
}

impl MessageKind {
    /// Parse the `type` field of a frame.
    pub fn from_value(value: &Value) -> Self {
        match value.as_str() {
            Some("question") => Self::Question,
            Some("guess") => Self::Guess,
            Some("answer") => Self::Answer,
            Some("invalid") => Self::Invalid,
            _ => Self::Other,
        }
    }

    /// Whether frames of this kind produce a history entry
    pub fn records_history(self) -> bool {
        matches!(self, Self::Question | Self::Guess)
    }
}

/// A decoded inbound frame
#[derive(Debug, Clone, PartialEq)]
pub struct GameMessage {
    /// Raw `type` field
    pub kind: Value,
    /// Text for the live response area
    pub message: Value,
    /// The player's submission, echoed back for `question` and `guess`
    pub input: Value,
    /// The server's verdict for `question` and `guess`
    pub response: Value,
}

impl GameMessage {
    /// Decode a text frame.
    ///
    /// Fails only if `payload` is not valid JSON. A JSON value that is not an
    /// object decodes with every field absent.
    pub fn parse(payload: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(payload)?;
        Ok(Self::from_value(&value))
    }

    fn from_value(value: &Value) -> Self {
        let field = |name: &str| value.get(name).cloned().unwrap_or(Value::Null);

        Self {
            kind: field("type"),
            message: field("message"),
            input: field("input"),
            response: field("response"),
        }
    }

    /// Category of this frame
    pub fn kind(&self) -> MessageKind {
        MessageKind::from_value(&self.kind)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_question_message() {
        // テスト項目: question メッセージの全フィールドがデコードされる
        // given (前提条件):
        let payload = r#"{"type":"question","message":"ok?","input":"foo","response":"maybe"}"#;

        // when (操作):
        let message = GameMessage::parse(payload).unwrap();

        // then (期待する結果):
        assert_eq!(message.kind(), MessageKind::Question);
        assert_eq!(message.message, json!("ok?"));
        assert_eq!(message.input, json!("foo"));
        assert_eq!(message.response, json!("maybe"));
    }

    #[test]
    fn test_parse_keeps_boolean_response() {
        // テスト項目: response の真偽値が JSON の型のまま保持される
        // given (前提条件):
        let payload = r#"{"type":"guess","message":"No.","input":"cat","response":false}"#;

        // when (操作):
        let message = GameMessage::parse(payload).unwrap();

        // then (期待する結果):
        assert_eq!(message.kind(), MessageKind::Guess);
        assert_eq!(message.response, Value::Bool(false));
    }

    #[test]
    fn test_parse_missing_fields_are_null() {
        // テスト項目: 欠けているフィールドは Null になる
        // given (前提条件):
        let payload = r#"{"type":"invalid","message":"Ask a yes/no question."}"#;

        // when (操作):
        let message = GameMessage::parse(payload).unwrap();

        // then (期待する結果):
        assert_eq!(message.kind(), MessageKind::Invalid);
        assert_eq!(message.input, Value::Null);
        assert_eq!(message.response, Value::Null);
    }

    #[test]
    fn test_parse_non_object_json() {
        // テスト項目: オブジェクト以外の JSON は全フィールドが欠けたメッセージになる
        // given (前提条件):
        let payload = "42";

        // when (操作):
        let message = GameMessage::parse(payload).unwrap();

        // then (期待する結果):
        assert_eq!(message.kind(), MessageKind::Other);
        assert_eq!(message.message, Value::Null);
    }

    #[test]
    fn test_parse_malformed_payload_fails() {
        // テスト項目: JSON として不正なペイロードはエラーになる
        // given (前提条件):
        let payload = "{not json";

        // when (操作):
        let result = GameMessage::parse(payload);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_kind_from_unknown_or_non_string_type() {
        // テスト項目: 未知の type や文字列以外の type は Other になる
        // given (前提条件):
        let unknown = json!("info");
        let number = json!(3);

        // when (操作):
        let from_unknown = MessageKind::from_value(&unknown);
        let from_number = MessageKind::from_value(&number);

        // then (期待する結果):
        assert_eq!(from_unknown, MessageKind::Other);
        assert_eq!(from_number, MessageKind::Other);
    }

    #[test]
    fn test_records_history_only_for_question_and_guess() {
        // テスト項目: question と guess のみが履歴に記録される
        // given (前提条件):
        let kinds = [
            MessageKind::Question,
            MessageKind::Guess,
            MessageKind::Answer,
            MessageKind::Invalid,
            MessageKind::Other,
        ];

        // when (操作):
        let recorded: Vec<bool> = kinds.iter().map(|kind| kind.records_history()).collect();

        // then (期待する結果):
        assert_eq!(recorded, vec![true, true, false, false, false]);
    }
}
