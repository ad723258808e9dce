//! Unit tests for sugar-agent.

#[cfg(test)]
mod agent {
    use sugar_core::AgentId;

    use crate::Agent;

    #[test]
    fn new_agent_starts_at_age_zero() {
        let a = Agent::new(AgentId(3), 10, 2, 4, 80);
        assert_eq!(a.id(), AgentId(3));
        assert_eq!(a.wealth, 10);
        assert_eq!(a.metabolism(), 2);
        assert_eq!(a.vision(), 4);
        assert_eq!(a.max_age(), 80);
        assert_eq!(a.age, 0);
        assert!(!a.is_expired());
    }

    #[test]
    fn expires_past_max_age() {
        let mut a = Agent::new(AgentId(1), 10, 1, 1, 5);
        a.age = 5;
        assert!(!a.is_expired(), "age == max_age is still alive");
        a.age = 6;
        assert!(a.is_expired());
    }

    #[test]
    fn expires_without_wealth() {
        let mut a = Agent::new(AgentId(1), 1, 2, 1, 100);
        a.wealth -= a.metabolism();
        assert_eq!(a.wealth, -1);
        assert!(a.is_expired());
        a.wealth = 0;
        assert!(a.is_expired());
    }
}

#[cfg(test)]
mod population {
    use sugar_core::AgentId;

    use crate::{Agent, AgentPopulation};

    fn population(n: u32) -> AgentPopulation {
        let mut pop = AgentPopulation::new();
        for i in 1..=n {
            pop.push(Agent::new(AgentId(i), i as i64, 1, 1, 50));
        }
        pop
    }

    #[test]
    fn iteration_is_insertion_order() {
        let pop = population(4);
        let ids: Vec<AgentId> = pop.ids().collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(2), AgentId(3), AgentId(4)]);
        assert_eq!(pop.len(), 4);
    }

    #[test]
    fn remove_preserves_survivor_order() {
        let mut pop = population(5);
        assert_eq!(pop.remove_ids(&[AgentId(2), AgentId(4)]), 2);
        let ids: Vec<AgentId> = pop.ids().collect();
        assert_eq!(ids, vec![AgentId(1), AgentId(3), AgentId(5)]);
    }

    #[test]
    fn remove_unknown_ids_is_harmless() {
        let mut pop = population(2);
        assert_eq!(pop.remove_ids(&[AgentId(9)]), 0);
        assert_eq!(pop.remove_ids(&[]), 0);
        assert_eq!(pop.len(), 2);
    }

    #[test]
    fn expired_ids_in_order() {
        let mut pop = population(4);
        pop.get_mut(0).unwrap().wealth = 0;
        pop.get_mut(2).unwrap().age = 51;
        assert_eq!(pop.expired_ids(), vec![AgentId(1), AgentId(3)]);
    }

    #[test]
    fn lookup_by_id_and_slot() {
        let pop = population(3);
        assert_eq!(pop.position(AgentId(3)), Some(2));
        assert_eq!(pop.find(AgentId(2)).map(|a| a.wealth), Some(2));
        assert!(pop.find(AgentId(7)).is_none());
        assert!(pop.get(3).is_none());
    }

    #[test]
    fn total_wealth_sums_signed() {
        let mut pop = population(3);
        pop.get_mut(1).unwrap().wealth = -4;
        assert_eq!(pop.total_wealth(), 1 - 4 + 3);
    }
}

#[cfg(test)]
mod factory {
    use sugar_core::{AgentId, SimRng, SugarscapeConfig, UniformRange};

    use crate::AgentFactory;

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut factory = AgentFactory::new();
        assert_eq!(factory.peek_id(), AgentId(1));
        let a = factory.create(1, 1, 1, 1);
        let b = factory.create(1, 1, 1, 1);
        assert_eq!((a.id(), b.id()), (AgentId(1), AgentId(2)));
        assert_eq!(factory.created(), 2);
        assert_eq!(factory.peek_id(), AgentId(3));
    }

    #[test]
    fn spawned_traits_lie_in_configured_ranges() {
        let config = SugarscapeConfig::default();
        let mut rng = SimRng::new(42);
        let mut factory = AgentFactory::new();
        for _ in 0..500 {
            let a = factory.spawn(&config, &mut rng);
            assert!(config.wealth_range.contains(a.wealth));
            assert!(config.metabolism_range.contains(a.metabolism()));
            assert!(config.vision_range.contains(a.vision() as i64));
            assert!(config.max_age_range.contains(a.max_age() as i64));
            assert_eq!(a.age, 0);
        }
    }

    #[test]
    fn degenerate_ranges_are_exact() {
        let config = SugarscapeConfig {
            wealth_range: UniformRange::new(7, 7),
            metabolism_range: UniformRange::new(2, 2),
            vision_range: UniformRange::new(3, 3),
            max_age_range: UniformRange::new(90, 90),
            ..SugarscapeConfig::default()
        };
        let mut rng = SimRng::new(0);
        let a = AgentFactory::new().spawn(&config, &mut rng);
        assert_eq!((a.wealth, a.metabolism(), a.vision(), a.max_age()), (7, 2, 3, 90));
    }

    #[test]
    fn same_seed_same_agents() {
        let config = SugarscapeConfig::default();
        let (mut r1, mut r2) = (SimRng::new(9), SimRng::new(9));
        let (mut f1, mut f2) = (AgentFactory::new(), AgentFactory::new());
        for _ in 0..20 {
            assert_eq!(f1.spawn(&config, &mut r1), f2.spawn(&config, &mut r2));
        }
    }
}
