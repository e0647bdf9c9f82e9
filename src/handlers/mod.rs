pub mod alunos;
