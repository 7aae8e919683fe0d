use super::ITeacherRepo;
use crate::repos::shared::inmemory_repo::*;
use lingora_domain::{AvailabilitySlot, Teacher, ID};
use std::sync::Mutex;

pub struct InMemoryTeacherRepo {
    teachers: Mutex<Vec<Teacher>>,
    course_links: Mutex<Vec<(ID, ID)>>,
    availability: Mutex<Vec<AvailabilitySlot>>,
}

impl InMemoryTeacherRepo {
    pub fn new() -> Self {
        Self {
            teachers: Mutex::new(Vec::new()),
            course_links: Mutex::new(Vec::new()),
            availability: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait::async_trait]
impl ITeacherRepo for InMemoryTeacherRepo {
    async fn insert(&self, teacher: &Teacher) -> anyhow::Result<()> {
        insert(teacher, &self.teachers);
        Ok(())
    }

    async fn find(&self, teacher_id: &ID) -> Option<Teacher> {
        find(teacher_id, &self.teachers)
    }

    async fn add_to_course(&self, teacher_id: &ID, course_id: &ID) -> anyhow::Result<()> {
        let mut links = self.course_links.lock().unwrap();
        let link = (course_id.clone(), teacher_id.clone());
        if !links.contains(&link) {
            links.push(link);
        }
        Ok(())
    }

    async fn find_by_course(&self, course_id: &ID) -> Vec<Teacher> {
        let links = self.course_links.lock().unwrap();
        let teacher_ids = links
            .iter()
            .filter(|(course, _)| course == course_id)
            .map(|(_, teacher)| teacher.clone())
            .collect::<Vec<_>>();
        drop(links);
        find_by(&self.teachers, |t| teacher_ids.contains(&t.id))
    }

    async fn insert_availability(&self, slot: &AvailabilitySlot) -> anyhow::Result<()> {
        insert(slot, &self.availability);
        Ok(())
    }

    async fn find_availability(&self, teacher_id: &ID) -> Vec<AvailabilitySlot> {
        let mut slots = find_by(&self.availability, |s| {
            s.teacher_id == *teacher_id && s.enabled
        });
        slots.sort_by_key(|s| (s.weekday, s.start_time));
        slots
    }
}
