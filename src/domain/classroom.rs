//! 교실 엔티티. 수강생 집합, 과제 목록, 학생별 제출 현황을 소유한다.

use std::collections::{HashMap, HashSet};

/// 단일 교실 상태.
/// 수강생/과제/제출은 생성 이후 단조 증가만 하며 삭제되지 않는다.
#[derive(Debug, Clone)]
pub struct Classroom {
    name: String,
    students: HashSet<String>,
    assignments: Vec<String>,
    submissions: HashMap<String, HashSet<String>>,
}

/// 교실 단위 제출 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Recorded,
    NotEnrolled,
}

impl Classroom {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            students: HashSet::new(),
            assignments: Vec::new(),
            submissions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 수강생을 등록한다. 재등록은 무해한 no-op이다.
    /// 기존 제출 기록은 절대 덮어쓰지 않는다.
    pub fn enroll(&mut self, student_id: &str) {
        self.students.insert(student_id.to_string());
        self.submissions.entry(student_id.to_string()).or_default();
    }

    /// 과제를 목록 끝에 추가한다. 중복 내용도 각각 별도 항목으로 남는다.
    pub fn schedule_assignment(&mut self, details: &str) {
        self.assignments.push(details.to_string());
    }

    /// 수강생의 과제 제출을 기록한다.
    /// 미등록 학생이면 상태 변경 없이 `NotEnrolled`를 반환한다.
    /// 동일 과제 재제출은 집합 의미론에 따라 no-op이다.
    pub fn submit(&mut self, student_id: &str, details: &str) -> SubmitOutcome {
        if !self.students.contains(student_id) {
            return SubmitOutcome::NotEnrolled;
        }

        self.submissions
            .entry(student_id.to_string())
            .or_default()
            .insert(details.to_string());
        SubmitOutcome::Recorded
    }

    pub fn has_student(&self, student_id: &str) -> bool {
        self.students.contains(student_id)
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn assignments(&self) -> &[String] {
        &self.assignments
    }

    /// 학생의 제출 집합을 반환한다. 등록된 적 없는 학생이면 None.
    pub fn submissions_of(&self, student_id: &str) -> Option<&HashSet<String>> {
        self.submissions.get(student_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enroll_is_idempotent() {
        let mut classroom = Classroom::new("Math");
        classroom.enroll("S1");
        classroom.enroll("S1");

        assert_eq!(classroom.student_count(), 1);
        assert!(classroom.has_student("S1"));
    }

    #[test]
    fn re_enroll_keeps_existing_submissions() {
        let mut classroom = Classroom::new("Math");
        classroom.enroll("S1");
        assert_eq!(classroom.submit("S1", "Homework 1"), SubmitOutcome::Recorded);

        classroom.enroll("S1");

        let submissions = classroom.submissions_of("S1").unwrap();
        assert!(submissions.contains("Homework 1"));
    }

    #[test]
    fn schedule_keeps_duplicate_entries_in_order() {
        let mut classroom = Classroom::new("Math");
        classroom.schedule_assignment("Homework 1");
        classroom.schedule_assignment("Homework 2");
        classroom.schedule_assignment("Homework 1");

        assert_eq!(
            classroom.assignments(),
            ["Homework 1", "Homework 2", "Homework 1"]
        );
    }

    #[test]
    fn submit_deduplicates_per_student() {
        let mut classroom = Classroom::new("Math");
        classroom.enroll("S1");
        assert_eq!(classroom.submit("S1", "Homework 1"), SubmitOutcome::Recorded);
        assert_eq!(classroom.submit("S1", "Homework 1"), SubmitOutcome::Recorded);

        assert_eq!(classroom.submissions_of("S1").unwrap().len(), 1);
    }

    #[test]
    fn submit_by_stranger_does_not_mutate() {
        let mut classroom = Classroom::new("Math");
        classroom.enroll("S1");

        assert_eq!(
            classroom.submit("S2", "Homework 1"),
            SubmitOutcome::NotEnrolled
        );
        assert!(classroom.submissions_of("S2").is_none());
        assert!(classroom.submissions_of("S1").unwrap().is_empty());
    }

    #[test]
    fn enrollment_initializes_empty_submission_set() {
        let mut classroom = Classroom::new("Math");
        classroom.enroll("S1");

        assert!(classroom.submissions_of("S1").unwrap().is_empty());
    }
}
