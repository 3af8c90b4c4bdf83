use crate::{ChatStreamEvent, GatewayError, GatewayResult};

/// A complete reply reassembled from a start/chunk/done event sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamedReply {
    pub ai_name: String,
    pub text: String,
}

/// Internal representation of a reply still being accumulated
#[derive(Debug, Clone)]
struct AccumulatedReply {
    ai_name: String,
    text: String,
    done: bool,
}

/// Manages the accumulation and merging of chat stream events into whole
/// per-assistant replies
pub struct ReplyAccumulator {
    /// Replies in order of first appearance on the stream
    replies: Vec<AccumulatedReply>,
}

impl ReplyAccumulator {
    /// Creates a new `ReplyAccumulator`
    #[must_use]
    pub fn new() -> Self {
        Self {
            replies: Vec::new(),
        }
    }

    /// Adds one stream event to the accumulator
    ///
    /// # Errors
    /// Returns an error for an in-band error event or for a chunk arriving
    /// after the reply completed
    pub fn add_event(&mut self, event: ChatStreamEvent) -> Result<(), String> {
        match event {
            ChatStreamEvent::Start { ai_name } => {
                self.entry(&ai_name);
                Ok(())
            }
            ChatStreamEvent::Chunk { ai_name, text } => {
                let reply = self.entry(&ai_name);
                if reply.done {
                    return Err(format!("chunk received after {ai_name} completed"));
                }
                reply.text.push_str(&text);
                Ok(())
            }
            ChatStreamEvent::Done { ai_name } => {
                self.entry(&ai_name).done = true;
                Ok(())
            }
            ChatStreamEvent::Error { message } => Err(message),
        }
    }

    /// Computes the final replies from accumulated events
    ///
    /// # Errors
    /// Returns an error if the stream ended before every reply completed
    pub fn compute_replies(self) -> GatewayResult<Vec<StreamedReply>> {
        self.replies
            .into_iter()
            .map(|reply| {
                if reply.done {
                    Ok(StreamedReply {
                        ai_name: reply.ai_name,
                        text: reply.text,
                    })
                } else {
                    Err(GatewayError::Stream(format!(
                        "stream ended before the reply from {} completed",
                        reply.ai_name
                    )))
                }
            })
            .collect()
    }

    /// Clears all accumulated data
    pub fn clear(&mut self) {
        self.replies.clear();
    }

    /// Gets the number of accumulated replies
    #[must_use]
    pub fn size(&self) -> usize {
        self.replies.len()
    }

    /// Checks if the accumulator has any data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.replies.is_empty()
    }

    fn entry(&mut self, ai_name: &str) -> &mut AccumulatedReply {
        let index = match self
            .replies
            .iter()
            .position(|reply| reply.ai_name == ai_name)
        {
            Some(index) => index,
            None => {
                self.replies.push(AccumulatedReply {
                    ai_name: ai_name.to_string(),
                    text: String::new(),
                    done: false,
                });
                self.replies.len() - 1
            }
        };
        &mut self.replies[index]
    }
}

impl Default for ReplyAccumulator {
    fn default() -> Self {
        Self::new()
    }
}
