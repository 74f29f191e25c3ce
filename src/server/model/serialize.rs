//! Projection-driven serialization of a `CampGraph` into response trees.
//!
//! Every entity merges its own `SERIALIZE_RULES` deny list into the caller's projection
//! before rendering, and those lists remove the edge leading back to the entity an edge
//! was entered from. Walking the graph therefore always moves away from the origin:
//! camper → signups → activity and activity → signups → camper both stop after one
//! signup hop, whatever the caller allows.

use crate::{
    model::{activity::ActivityDto, camper::CamperDto, signup::SignupDto},
    server::model::{
        activity::Activity, camper::Camper, graph::CampGraph, projection::Projection,
        signup::Signup,
    },
};

impl CampGraph {
    /// Renders a camper, or `None` when the camper is not part of the graph.
    pub fn camper_tree(&self, id: i32, projection: &Projection) -> Option<CamperDto> {
        let camper = self.camper(id)?;
        let projection = projection
            .clone()
            .excluding(Camper::SERIALIZE_RULES.iter().copied());

        Some(CamperDto {
            id: projection.includes("id").then_some(camper.id),
            name: projection.includes("name").then(|| camper.name.clone()),
            age: projection.includes("age").then_some(camper.age),
            signups: projection.includes("signups").then(|| {
                let child = projection.descend("signups");
                self.signups_of_camper(id)
                    .filter_map(|signup| self.signup_tree(signup.id, &child))
                    .collect()
            }),
        })
    }

    /// Renders an activity, or `None` when the activity is not part of the graph.
    pub fn activity_tree(&self, id: i32, projection: &Projection) -> Option<ActivityDto> {
        let activity = self.activity(id)?;
        let projection = projection
            .clone()
            .excluding(Activity::SERIALIZE_RULES.iter().copied());

        Some(ActivityDto {
            id: projection.includes("id").then_some(activity.id),
            name: projection.includes("name").then(|| activity.name.clone()),
            difficulty: projection
                .includes("difficulty")
                .then_some(activity.difficulty),
            signups: projection.includes("signups").then(|| {
                let child = projection.descend("signups");
                self.signups_of_activity(id)
                    .filter_map(|signup| self.signup_tree(signup.id, &child))
                    .collect()
            }),
        })
    }

    /// Renders a signup, or `None` when the signup is not part of the graph.
    ///
    /// The `camper` and `activity` edges are omitted when the referenced entity was not
    /// loaded into the graph.
    pub fn signup_tree(&self, id: i32, projection: &Projection) -> Option<SignupDto> {
        let signup = self.signup(id)?;
        let projection = projection
            .clone()
            .excluding(Signup::SERIALIZE_RULES.iter().copied());

        Some(SignupDto {
            id: projection.includes("id").then_some(signup.id),
            time: projection.includes("time").then_some(signup.time),
            camper_id: projection.includes("camper_id").then_some(signup.camper_id),
            activity_id: projection
                .includes("activity_id")
                .then_some(signup.activity_id),
            camper: projection
                .includes("camper")
                .then(|| self.camper_tree(signup.camper_id, &projection.descend("camper")))
                .flatten(),
            activity: projection
                .includes("activity")
                .then(|| self.activity_tree(signup.activity_id, &projection.descend("activity")))
                .flatten(),
        })
    }

    /// Renders every camper in the graph in id order.
    pub fn campers_tree(&self, projection: &Projection) -> Vec<CamperDto> {
        self.camper_ids()
            .filter_map(|id| self.camper_tree(id, projection))
            .collect()
    }

    /// Renders every activity in the graph in id order.
    pub fn activities_tree(&self, projection: &Projection) -> Vec<ActivityDto> {
        self.activity_ids()
            .filter_map(|id| self.activity_tree(id, projection))
            .collect()
    }
}
