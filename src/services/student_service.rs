use crate::models::{CreateStudentRequest, Student, UpdateStudentRequest};
use crate::services::{api_service::new_record_id, ApiService};
use crate::utils::AppError;

impl ApiService {
    pub async fn get_students(&self) -> Result<Vec<Student>, AppError> {
        log::debug!("🎒 get_students");
        self.simulate_request(self.store().students().to_vec()).await
    }

    pub async fn get_student(&self, id: &str) -> Result<Option<Student>, AppError> {
        log::debug!("🎒 get_student {}", id);
        self.simulate_request(self.store().find_student(id).cloned()).await
    }

    pub async fn add_student(&self, student: CreateStudentRequest) -> Result<Student, AppError> {
        let student = student.into_student(new_record_id());
        log::debug!("🎒 add_student {} ({})", student.name, student.id);
        self.simulate_request(student).await
    }

    pub async fn update_student(
        &self,
        id: &str,
        update: UpdateStudentRequest,
    ) -> Result<Student, AppError> {
        log::debug!("🎒 update_student {}", id);
        let merged = self.store().find_student(id).map(|s| s.merged(update));
        self.simulate_update(merged, "student", id).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{CreateStudentRequest, UpdateStudentRequest};
    use crate::services::api_service::test_support::{failing_service, instant_service};
    use crate::utils::AppError;

    #[tokio::test]
    async fn test_added_student_is_not_persisted() {
        let api = instant_service();
        let added = api
            .add_student(CreateStudentRequest {
                name: "X".into(),
                school: "Future Academy".into(),
                grade: "Grade 1".into(),
                image_url: None,
            })
            .await
            .unwrap();

        assert_eq!(added.name, "X");
        assert!(!added.id.is_empty());
        assert_ne!(added.id, "1");
        assert_ne!(added.id, "2");

        let students = api.get_students().await.unwrap();
        let names: Vec<&str> = students.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Abena Mensah", "Kwame Mensah"]);
    }

    #[tokio::test]
    async fn test_get_student_by_id() {
        let api = instant_service();
        let student = api.get_student("1").await.unwrap().unwrap();
        assert_eq!(student.school, "Golden Gate International School");
        assert!(api.get_student("42").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_student_merges_fields() {
        let api = instant_service();
        let updated = api
            .update_student(
                "2",
                UpdateStudentRequest {
                    grade: Some("Grade 7".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, "2");
        assert_eq!(updated.name, "Kwame Mensah");
        assert_eq!(updated.grade, "Grade 7");
    }

    #[tokio::test]
    async fn test_update_unknown_student_is_not_found() {
        let api = instant_service();
        let err = api
            .update_student("99", UpdateStudentRequest::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_network_failure_wins_over_not_found() {
        let api = failing_service();
        let err = api
            .update_student("99", UpdateStudentRequest::default())
            .await
            .unwrap_err();
        assert_eq!(err, AppError::network());
    }
}
