//! Per-question comparator tables.
//!
//! Every comparator maps an unordered pair of answers to a curated sub-score.
//! The final arm of each table is the default, which also absorbs any pair
//! where one side is not a recognized option.

use crate::core::quiz::{
    DecisionStyle, EnergyLevel, FriendRole, ParsedAnswers, PressureResponse, Pride, QUESTION_COUNT,
    SocialEnergy, Superpower, Vacation, WorkEnvironment,
};

/// Q1: matching energy levels score high, opposite levels low
pub fn social_energy(a: Option<SocialEnergy>, b: Option<SocialEnergy>) -> u8 {
    match (a.map(SocialEnergy::level), b.map(SocialEnergy::level)) {
        (Some(EnergyLevel::High), Some(EnergyLevel::High)) => 85,
        (Some(EnergyLevel::Low), Some(EnergyLevel::Low)) => 90,
        (Some(EnergyLevel::High), Some(EnergyLevel::Low))
        | (Some(EnergyLevel::Low), Some(EnergyLevel::High)) => 50,
        _ => 70,
    }
}

/// Q2: a planner and a spontaneous traveler complement each other
pub fn vacation(a: Option<Vacation>, b: Option<Vacation>) -> u8 {
    use Vacation::*;

    match (a, b) {
        (Some(Itinerary), Some(Backpacking)) | (Some(Backpacking), Some(Itinerary)) => 95,
        (Some(Volunteer | Retreat), Some(Volunteer | Retreat)) => 75,
        (Some(Itinerary), Some(Itinerary)) | (Some(Backpacking), Some(Backpacking)) => 75,
        _ => 60,
    }
}

/// Q3
pub fn decision_style(a: Option<DecisionStyle>, b: Option<DecisionStyle>) -> u8 {
    use DecisionStyle::*;

    match (a, b) {
        (Some(Gut), Some(Research)) | (Some(Research), Some(Gut)) => 90,
        (Some(People), Some(Logic)) | (Some(Logic), Some(People)) => 80,
        (Some(x), Some(y)) if x == y => 70,
        _ => 65,
    }
}

/// Q4: core values weigh the most, so mismatches fall far
pub fn friend_role(a: Option<FriendRole>, b: Option<FriendRole>) -> u8 {
    use FriendRole::*;

    match (a, b) {
        (Some(x), Some(y)) if x == y => 95,
        (Some(MakesThingsHappen), Some(KeepsGrounded))
        | (Some(KeepsGrounded), Some(MakesThingsHappen))
        | (Some(RemembersBirthdays), Some(KeepsGrounded))
        | (Some(KeepsGrounded), Some(RemembersBirthdays))
        | (Some(InterestingIdeas), Some(MakesThingsHappen))
        | (Some(MakesThingsHappen), Some(InterestingIdeas)) => 85,
        _ => 40,
    }
}

/// Q5
pub fn pressure(a: Option<PressureResponse>, b: Option<PressureResponse>) -> u8 {
    use PressureResponse::*;

    match (a, b) {
        (Some(Thrive), Some(StayCalm)) | (Some(StayCalm), Some(Thrive)) => 90,
        (Some(x), Some(y)) if x == y => 75,
        (Some(RallyTeam), Some(QuietTime)) | (Some(QuietTime), Some(RallyTeam)) => 60,
        _ => 70,
    }
}

/// Q6: only fast-paced and independent have no adjacency
pub fn work_environment(a: Option<WorkEnvironment>, b: Option<WorkEnvironment>) -> u8 {
    use WorkEnvironment::*;

    match (a, b) {
        (Some(x), Some(y)) if x == y => 85,
        (Some(FastPaced), Some(Stable | Collaborative))
        | (Some(Stable | Collaborative), Some(FastPaced))
        | (Some(Stable), Some(Collaborative | Independent))
        | (Some(Collaborative | Independent), Some(Stable))
        | (Some(Collaborative), Some(Independent))
        | (Some(Independent), Some(Collaborative)) => 70,
        _ => 45,
    }
}

/// Q7
pub fn pride(a: Option<Pride>, b: Option<Pride>) -> u8 {
    use Pride::*;

    match (a, b) {
        (Some(x), Some(y)) if x == y => 90,
        (Some(TakingRisks), Some(ComplexProblem))
        | (Some(ComplexProblem), Some(TakingRisks))
        | (Some(PositiveDifference), Some(ComplexProblem))
        | (Some(ComplexProblem), Some(PositiveDifference))
        | (Some(PositiveDifference), Some(BuildingLasting))
        | (Some(BuildingLasting), Some(PositiveDifference)) => 80,
        _ => 60,
    }
}

/// Q8
pub fn superpower(a: Option<Superpower>, b: Option<Superpower>) -> u8 {
    use Superpower::*;

    match (a, b) {
        (Some(x), Some(y)) if x == y => 90,
        (Some(ReadingTheRoom), Some(ExcitingPeople))
        | (Some(ExcitingPeople), Some(ReadingTheRoom))
        | (Some(LevelHeaded), Some(SeeingPatterns))
        | (Some(SeeingPatterns), Some(LevelHeaded)) => 80,
        _ => 65,
    }
}

/// Run every comparator, in answer-vector order
pub fn subscores(a: &ParsedAnswers, b: &ParsedAnswers) -> [u8; QUESTION_COUNT] {
    [
        social_energy(a.social_energy, b.social_energy),
        vacation(a.vacation, b.vacation),
        decision_style(a.decision_style, b.decision_style),
        friend_role(a.friend_role, b.friend_role),
        pressure(a.pressure, b.pressure),
        work_environment(a.work_environment, b.work_environment),
        pride(a.pride, b.pride),
        superpower(a.superpower, b.superpower),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Check `f(a, b) == f(b, a)` over every pair of options plus the unknown answer
    fn assert_symmetric<T: Copy + std::fmt::Debug>(all: &[T], f: fn(Option<T>, Option<T>) -> u8) {
        let options: Vec<Option<T>> = all.iter().copied().map(Some).chain([None]).collect();
        for a in &options {
            for b in &options {
                assert_eq!(f(*a, *b), f(*b, *a), "asymmetric for {:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_every_table_is_symmetric() {
        assert_symmetric(SocialEnergy::ALL, social_energy);
        assert_symmetric(Vacation::ALL, vacation);
        assert_symmetric(DecisionStyle::ALL, decision_style);
        assert_symmetric(FriendRole::ALL, friend_role);
        assert_symmetric(PressureResponse::ALL, pressure);
        assert_symmetric(WorkEnvironment::ALL, work_environment);
        assert_symmetric(Pride::ALL, pride);
        assert_symmetric(Superpower::ALL, superpower);
    }

    #[test]
    fn test_social_energy() {
        use SocialEnergy::*;
        assert_eq!(social_energy(Some(Dj), Some(Host)), 85);
        assert_eq!(social_energy(Some(Observer), Some(DeepConversation)), 90);
        assert_eq!(social_energy(Some(Dj), Some(Observer)), 50);
        assert_eq!(social_energy(Some(Dj), None), 70);
    }

    #[test]
    fn test_vacation() {
        use Vacation::*;
        assert_eq!(vacation(Some(Itinerary), Some(Backpacking)), 95);
        assert_eq!(vacation(Some(Itinerary), Some(Itinerary)), 75);
        assert_eq!(vacation(Some(Volunteer), Some(Retreat)), 75);
        assert_eq!(vacation(Some(Itinerary), Some(Volunteer)), 60);
        assert_eq!(vacation(None, None), 60);
    }

    #[test]
    fn test_decision_style() {
        use DecisionStyle::*;
        assert_eq!(decision_style(Some(Research), Some(Gut)), 90);
        assert_eq!(decision_style(Some(Logic), Some(People)), 80);
        assert_eq!(decision_style(Some(Gut), Some(Gut)), 70);
        assert_eq!(decision_style(Some(Gut), Some(Logic)), 65);
        assert_eq!(decision_style(None, None), 65);
    }

    #[test]
    fn test_friend_role() {
        use FriendRole::*;
        assert_eq!(friend_role(Some(KeepsGrounded), Some(KeepsGrounded)), 95);
        assert_eq!(friend_role(Some(KeepsGrounded), Some(RemembersBirthdays)), 85);
        assert_eq!(friend_role(Some(InterestingIdeas), Some(KeepsGrounded)), 40);
        assert_eq!(friend_role(None, None), 40);
    }

    #[test]
    fn test_pressure() {
        use PressureResponse::*;
        assert_eq!(pressure(Some(StayCalm), Some(Thrive)), 90);
        assert_eq!(pressure(Some(QuietTime), Some(QuietTime)), 75);
        assert_eq!(pressure(Some(RallyTeam), Some(QuietTime)), 60);
        assert_eq!(pressure(Some(RallyTeam), Some(Thrive)), 70);
    }

    #[test]
    fn test_work_environment() {
        use WorkEnvironment::*;
        assert_eq!(work_environment(Some(Stable), Some(Stable)), 85);
        assert_eq!(work_environment(Some(Stable), Some(FastPaced)), 70);
        assert_eq!(work_environment(Some(Independent), Some(Collaborative)), 70);
        assert_eq!(work_environment(Some(FastPaced), Some(Independent)), 45);
        assert_eq!(work_environment(Some(FastPaced), None), 45);
    }

    #[test]
    fn test_pride_and_superpower() {
        assert_eq!(pride(Some(Pride::ComplexProblem), Some(Pride::TakingRisks)), 80);
        assert_eq!(pride(Some(Pride::TakingRisks), Some(Pride::BuildingLasting)), 60);
        assert_eq!(superpower(Some(Superpower::SeeingPatterns), Some(Superpower::LevelHeaded)), 80);
        assert_eq!(superpower(Some(Superpower::SeeingPatterns), Some(Superpower::ReadingTheRoom)), 65);
    }
}
