use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: String,
    pub name: String,
    pub school: String,
    pub grade: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Request para cadastrar aluno
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    pub name: String,
    pub school: String,
    pub grade: String,
    pub image_url: Option<String>,
}

/// Request para atualizar aluno
#[derive(Debug, Default, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    pub name: Option<String>,
    pub school: Option<String>,
    pub grade: Option<String>,
    pub image_url: Option<String>,
}

impl CreateStudentRequest {
    pub fn into_student(self, id: String) -> Student {
        Student {
            id,
            name: self.name,
            school: self.school,
            grade: self.grade,
            image_url: self.image_url,
        }
    }
}

impl Student {
    pub fn merged(&self, update: UpdateStudentRequest) -> Student {
        Student {
            id: self.id.clone(),
            name: update.name.unwrap_or_else(|| self.name.clone()),
            school: update.school.unwrap_or_else(|| self.school.clone()),
            grade: update.grade.unwrap_or_else(|| self.grade.clone()),
            image_url: update.image_url.or_else(|| self.image_url.clone()),
        }
    }
}
