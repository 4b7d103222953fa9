//! Respond use case.
//!
//! Turns one chat message into a [`ChatReply`] by walking a fixed cascade:
//!
//! 1. Sentiment (failures degrade to neutral)
//! 2. Problem path: the solver when a problem keyword is present, or the
//!    calculator in [`ResponderMode::Calculator`]
//! 3. Rule matcher, accepted only above the similarity threshold
//! 4. Text generator, when one is configured
//! 5. A random fallback line

use crate::config::{DEFAULT_FALLBACK_RESPONSES, ResponderConfig};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::rule_matcher::{NoRuleMatcher, RuleMatcher};
use crate::ports::sentiment::{NeutralSentimentAnalyzer, SentimentAnalyzer};
use crate::ports::text_generator::{GenerationError, NoTextGenerator, TextGenerator};
use crate::use_cases::solve_problem::SolveProblemUseCase;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use solver_domain::core::string::truncate;
use solver_domain::{
    ChatReply, ProblemQuery, ReplyKind, ResponderMode, Sentiment, Solution, SolutionType,
    quick_math,
};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub struct RespondUseCase {
    config: ResponderConfig,
    solver: SolveProblemUseCase,
    sentiment: Arc<dyn SentimentAnalyzer>,
    rules: Arc<dyn RuleMatcher>,
    generator: Arc<dyn TextGenerator>,
    conversation_logger: Arc<dyn ConversationLogger>,
    rng: Mutex<StdRng>,
}

impl RespondUseCase {
    /// Responder with no models attached: neutral sentiment, no rules,
    /// no generator.
    pub fn new(config: ResponderConfig) -> Self {
        Self {
            config,
            solver: SolveProblemUseCase::new(),
            sentiment: Arc::new(NeutralSentimentAnalyzer),
            rules: Arc::new(NoRuleMatcher),
            generator: Arc::new(NoTextGenerator),
            conversation_logger: Arc::new(NoConversationLogger),
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_sentiment_analyzer(mut self, analyzer: Arc<dyn SentimentAnalyzer>) -> Self {
        self.sentiment = analyzer;
        self
    }

    pub fn with_rule_matcher(mut self, matcher: Arc<dyn RuleMatcher>) -> Self {
        self.rules = matcher;
        self
    }

    pub fn with_text_generator(mut self, generator: Arc<dyn TextGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Create with a conversation logger (shared with the inner solver).
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.solver = self.solver.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    /// Seed the random reply picker.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = Mutex::new(StdRng::seed_from_u64(seed));
        self
    }

    pub fn config(&self) -> &ResponderConfig {
        &self.config
    }

    /// The solver behind the problem path.
    pub fn solver(&self) -> &SolveProblemUseCase {
        &self.solver
    }

    pub async fn respond(&self, text: &str) -> ChatReply {
        info!("Responding to: {}", truncate(text, 100));

        let sentiment = match self.sentiment.analyze(text).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                warn!("Sentiment analysis failed, using neutral: {}", e);
                Sentiment::neutral()
            }
        };

        let reply = match self.problem_reply(text, &sentiment) {
            Some(reply) => reply,
            None => self.chat_reply(text, &sentiment).await,
        };

        debug!("Reply type: {}", reply.kind);

        self.conversation_logger.log(ConversationEvent::new(
            "chat_reply",
            serde_json::json!({
                "message": text,
                "reply_type": reply.kind.to_string(),
                "response": &reply.response,
                "sentiment": &reply.sentiment,
                "confidence": reply.confidence,
            }),
        ));

        reply
    }

    fn problem_reply(&self, text: &str, sentiment: &Sentiment) -> Option<ChatReply> {
        match self.config.mode {
            ResponderMode::Solver => {
                if !self.config.is_problem(text) {
                    return None;
                }
                let solution = self.solver.solve(&ProblemQuery::new(text));
                Some(ChatReply::from_solution(solution, sentiment))
            }
            ResponderMode::Calculator => quick_math(text).map(|answer| {
                let details =
                    Solution::new(answer.clone(), answer.clone(), SolutionType::Mathematics);
                ChatReply {
                    solution_details: Some(details),
                    ..ChatReply::new(
                        answer,
                        ReplyKind::ProblemSolution(SolutionType::Mathematics),
                        sentiment,
                    )
                }
            }),
        }
    }

    async fn chat_reply(&self, text: &str, sentiment: &Sentiment) -> ChatReply {
        if let Some(rule) = self.rules.best_match(text) {
            debug!("Best rule score: {:.3}", rule.score);
            if rule.score > self.config.similarity_threshold
                && let Some(response) = self.pick(&rule.responses)
            {
                return ChatReply::new(response, ReplyKind::RuleBased, sentiment);
            }
        }

        match self
            .generator
            .generate(text, self.config.generation_max_length)
            .await
        {
            Ok(generated) if !generated.trim().is_empty() => {
                return ChatReply::new(generated.trim(), ReplyKind::AiGenerated, sentiment);
            }
            Ok(_) => debug!("Generator '{}' returned nothing", self.generator.name()),
            Err(GenerationError::Unavailable) => {}
            Err(e) => warn!("Generator '{}' failed: {}", self.generator.name(), e),
        }

        let response = self
            .pick(&self.config.fallback_responses)
            .unwrap_or_else(|| DEFAULT_FALLBACK_RESPONSES[0].to_string());
        ChatReply::new(response, ReplyKind::Fallback, sentiment)
    }

    fn pick(&self, choices: &[String]) -> Option<String> {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        choices.choose(&mut *rng).cloned()
    }
}
