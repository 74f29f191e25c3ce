//! In-memory arena of loaded campers, activities and signups.
//!
//! The graph stores every entity once, keyed by id, and records ownership as two
//! indexes: camper id to signup ids and activity id to signup ids. Navigation in either
//! direction goes through a signup, and no entity holds a pointer to another.

use std::collections::BTreeMap;

use crate::server::model::{activity::Activity, camper::Camper, signup::Signup};

#[derive(Debug, Clone, Default)]
pub struct CampGraph {
    campers: BTreeMap<i32, Camper>,
    activities: BTreeMap<i32, Activity>,
    signups: BTreeMap<i32, Signup>,
    camper_signups: BTreeMap<i32, Vec<i32>>,
    activity_signups: BTreeMap<i32, Vec<i32>>,
}

/// A graph loaded around the entity a request is about.
#[derive(Debug, Clone)]
pub struct RootedGraph {
    pub root: i32,
    pub graph: CampGraph,
}

impl CampGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_camper(&mut self, camper: Camper) {
        self.campers.insert(camper.id, camper);
    }

    pub fn insert_activity(&mut self, activity: Activity) {
        self.activities.insert(activity.id, activity);
    }

    /// Inserts a signup and records it under both of its owners.
    ///
    /// Re-inserting a signup with the same id replaces it and moves it to its new owners.
    pub fn insert_signup(&mut self, signup: Signup) {
        if let Some(previous) = self.signups.remove(&signup.id) {
            remove_owned(&mut self.camper_signups, previous.camper_id, previous.id);
            remove_owned(&mut self.activity_signups, previous.activity_id, previous.id);
        }

        self.camper_signups
            .entry(signup.camper_id)
            .or_default()
            .push(signup.id);
        self.activity_signups
            .entry(signup.activity_id)
            .or_default()
            .push(signup.id);
        self.signups.insert(signup.id, signup);
    }

    pub fn with_camper(mut self, camper: Camper) -> Self {
        self.insert_camper(camper);
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.insert_activity(activity);
        self
    }

    pub fn with_signup(mut self, signup: Signup) -> Self {
        self.insert_signup(signup);
        self
    }

    pub fn camper(&self, id: i32) -> Option<&Camper> {
        self.campers.get(&id)
    }

    pub fn activity(&self, id: i32) -> Option<&Activity> {
        self.activities.get(&id)
    }

    pub fn signup(&self, id: i32) -> Option<&Signup> {
        self.signups.get(&id)
    }

    /// Camper ids in ascending order.
    pub fn camper_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.campers.keys().copied()
    }

    /// Activity ids in ascending order.
    pub fn activity_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.activities.keys().copied()
    }

    /// Signups owned by a camper, in insertion order.
    pub fn signups_of_camper(&self, camper_id: i32) -> impl Iterator<Item = &Signup> + '_ {
        self.owned_signups(&self.camper_signups, camper_id)
    }

    /// Signups owned by an activity, in insertion order.
    pub fn signups_of_activity(&self, activity_id: i32) -> impl Iterator<Item = &Signup> + '_ {
        self.owned_signups(&self.activity_signups, activity_id)
    }

    /// Activities a camper is signed up for, reached through the camper's signups.
    pub fn activities_of_camper(&self, camper_id: i32) -> impl Iterator<Item = &Activity> + '_ {
        self.signups_of_camper(camper_id)
            .filter_map(move |signup| self.activity(signup.activity_id))
    }

    /// Campers signed up for an activity, reached through the activity's signups.
    pub fn campers_of_activity(&self, activity_id: i32) -> impl Iterator<Item = &Camper> + '_ {
        self.signups_of_activity(activity_id)
            .filter_map(move |signup| self.camper(signup.camper_id))
    }

    fn owned_signups<'a>(
        &'a self,
        index: &'a BTreeMap<i32, Vec<i32>>,
        owner: i32,
    ) -> impl Iterator<Item = &'a Signup> + 'a {
        index
            .get(&owner)
            .into_iter()
            .flatten()
            .filter_map(move |id| self.signups.get(id))
    }
}

fn remove_owned(index: &mut BTreeMap<i32, Vec<i32>>, owner: i32, signup_id: i32) {
    if let Some(ids) = index.get_mut(&owner) {
        ids.retain(|id| *id != signup_id);
    }
}
