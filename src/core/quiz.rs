//! The fixed personality quiz.
//!
//! Each question has a closed set of four options, modelled as one enum per
//! question. Answers arrive as the literal option text; [`ParsedAnswers`]
//! turns an answer vector into typed options, leaving `None` wherever the text
//! is not a known option for that slot.

use serde::Serialize;

/// Number of questions in the quiz (and the length of every answer vector)
pub const QUESTION_COUNT: usize = 8;

/// Compare option text, treating typographic and ASCII apostrophes as equal
fn same_text(canonical: &str, text: &str) -> bool {
    fn fold(c: char) -> char {
        match c {
            '\u{2019}' | '\u{2018}' => '\'',
            other => other,
        }
    }

    canonical.chars().map(fold).eq(text.chars().map(fold))
}

macro_rules! quiz_options {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $text:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Every option, in the order the quiz presents them
            pub const ALL: &'static [Self] = &[$(Self::$variant,)+];

            /// Option texts, in the order the quiz presents them
            pub const TEXTS: &'static [&'static str] = &[$($text,)+];

            /// Canonical option text as shown to users
            pub fn text(self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }

            /// Look up the option with the given text, if any
            pub fn parse(text: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|option| same_text(option.text(), text))
            }
        }
    };
}

quiz_options! {
    /// Q1: "At a party, you're most likely to be"
    pub enum SocialEnergy {
        Dj => "The DJ controlling the music and energy",
        DeepConversation => "Deep in conversation with one fascinating person",
        Host => "The host making sure everyone’s having fun",
        Observer => "Observing the social dynamics from a cozy corner",
    }
}

quiz_options! {
    /// Q2: "Your ideal vacation is"
    pub enum Vacation {
        Backpacking => "Backpacking through unexplored places with no set plans",
        Itinerary => "A detailed itinerary hitting all the must-see spots",
        Volunteer => "Somewhere you can help locals or volunteer",
        Retreat => "A peaceful retreat where you can think and recharge",
    }
}

quiz_options! {
    /// Q3: "When making decisions, you"
    pub enum DecisionStyle {
        Gut => "Go with your gut immediately",
        Research => "Research every possible angle first",
        People => "Consider how it affects everyone involved",
        Logic => "Follow a logical system or framework",
    }
}

quiz_options! {
    /// Q4: "Your friends describe you as"
    pub enum FriendRole {
        MakesThingsHappen => "The one who makes things happen",
        KeepsGrounded => "The one who keeps everyone grounded",
        RemembersBirthdays => "The one who remembers everyone’s birthdays",
        InterestingIdeas => "The one with the most interesting ideas",
    }
}

quiz_options! {
    /// Q5: "Under pressure, you"
    pub enum PressureResponse {
        Thrive => "Thrive and get energized by the challenge",
        StayCalm => "Stay calm and work through it systematically",
        RallyTeam => "Rally everyone together as a team",
        QuietTime => "Need quiet time to process and plan",
    }
}

quiz_options! {
    /// Q6: "Your ideal work environment is"
    pub enum WorkEnvironment {
        FastPaced => "Fast-paced with lots of variety and interaction",
        Stable => "Stable with clear expectations and processes",
        Collaborative => "Collaborative with opportunities to help others",
        Independent => "Independent with time for deep thinking",
    }
}

quiz_options! {
    /// Q7: "You're most proud of"
    pub enum Pride {
        TakingRisks => "Taking risks that paid off big",
        BuildingLasting => "Building something lasting and reliable",
        PositiveDifference => "Making a positive difference in someone’s life",
        ComplexProblem => "Solving a complex problem others couldn’t",
    }
}

quiz_options! {
    /// Q8: "Your secret superpower is"
    pub enum Superpower {
        ReadingTheRoom => "Reading the room and knowing what people need",
        SeeingPatterns => "Seeing patterns others miss",
        ExcitingPeople => "Getting people excited about possibilities",
        LevelHeaded => "Staying level-headed when everything’s chaos",
    }
}

/// Energy level of a [`SocialEnergy`] answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnergyLevel {
    High,
    Low,
}

impl SocialEnergy {
    pub fn level(self) -> EnergyLevel {
        match self {
            SocialEnergy::Dj | SocialEnergy::Host => EnergyLevel::High,
            SocialEnergy::DeepConversation | SocialEnergy::Observer => EnergyLevel::Low,
        }
    }
}

/// An option from any question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuizAnswer {
    SocialEnergy(SocialEnergy),
    Vacation(Vacation),
    DecisionStyle(DecisionStyle),
    FriendRole(FriendRole),
    PressureResponse(PressureResponse),
    WorkEnvironment(WorkEnvironment),
    Pride(Pride),
    Superpower(Superpower),
}

impl QuizAnswer {
    pub fn text(self) -> &'static str {
        match self {
            QuizAnswer::SocialEnergy(o) => o.text(),
            QuizAnswer::Vacation(o) => o.text(),
            QuizAnswer::DecisionStyle(o) => o.text(),
            QuizAnswer::FriendRole(o) => o.text(),
            QuizAnswer::PressureResponse(o) => o.text(),
            QuizAnswer::WorkEnvironment(o) => o.text(),
            QuizAnswer::Pride(o) => o.text(),
            QuizAnswer::Superpower(o) => o.text(),
        }
    }

    /// Whether `text` is this option's text, regardless of which slot it came from
    pub fn matches_text(self, text: &str) -> bool {
        same_text(self.text(), text)
    }
}

/// A quiz question as served to clients
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

/// The quiz, ordered by answer-vector index
pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: "Q1",
        prompt: "At a party, you’re most likely to be:",
        options: SocialEnergy::TEXTS,
    },
    Question {
        id: "Q2",
        prompt: "Your ideal vacation is:",
        options: Vacation::TEXTS,
    },
    Question {
        id: "Q3",
        prompt: "When making decisions, you:",
        options: DecisionStyle::TEXTS,
    },
    Question {
        id: "Q4",
        prompt: "Your friends describe you as:",
        options: FriendRole::TEXTS,
    },
    Question {
        id: "Q5",
        prompt: "Under pressure, you:",
        options: PressureResponse::TEXTS,
    },
    Question {
        id: "Q6",
        prompt: "Your ideal work environment is:",
        options: WorkEnvironment::TEXTS,
    },
    Question {
        id: "Q7",
        prompt: "You’re most proud of:",
        options: Pride::TEXTS,
    },
    Question {
        id: "Q8",
        prompt: "Your secret superpower is:",
        options: Superpower::TEXTS,
    },
];

/// Find a question by its id ("Q1".."Q8"), case-insensitively
pub fn find_question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id.eq_ignore_ascii_case(id))
}

/// An answer vector resolved into typed options.
///
/// `None` marks an answer whose text is not a known option for its slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedAnswers {
    pub social_energy: Option<SocialEnergy>,
    pub vacation: Option<Vacation>,
    pub decision_style: Option<DecisionStyle>,
    pub friend_role: Option<FriendRole>,
    pub pressure: Option<PressureResponse>,
    pub work_environment: Option<WorkEnvironment>,
    pub pride: Option<Pride>,
    pub superpower: Option<Superpower>,
}

impl ParsedAnswers {
    pub fn parse<S: AsRef<str>>(answers: &[S; QUESTION_COUNT]) -> Self {
        Self {
            social_energy: SocialEnergy::parse(answers[0].as_ref()),
            vacation: Vacation::parse(answers[1].as_ref()),
            decision_style: DecisionStyle::parse(answers[2].as_ref()),
            friend_role: FriendRole::parse(answers[3].as_ref()),
            pressure: PressureResponse::parse(answers[4].as_ref()),
            work_environment: WorkEnvironment::parse(answers[5].as_ref()),
            pride: Pride::parse(answers[6].as_ref()),
            superpower: Superpower::parse(answers[7].as_ref()),
        }
    }
}

/// Whether `text` is a known option for the question at `index`
pub fn is_known_option(index: usize, text: &str) -> bool {
    QUESTIONS
        .get(index)
        .map(|q| q.options.iter().any(|option| same_text(option, text)))
        .unwrap_or(false)
}

/// Indexes of answers that are not known options for their question.
///
/// Answers beyond the quiz length are always reported.
pub fn unrecognized_positions<S: AsRef<str>>(answers: &[S]) -> Vec<usize> {
    answers
        .iter()
        .enumerate()
        .filter(|(i, text)| !is_known_option(*i, text.as_ref()))
        .map(|(i, _)| i)
        .collect()
}
