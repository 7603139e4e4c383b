//! Header texts of the survey export.
//!
//! Matching is exact, so these strings must equal the export byte for byte.

/// Respondent identifier question (label row).
pub const USER_ID: &str = "Código de usuario";

/// Gender identity question (label row).
pub const SEX: &str =
    "¿Con qué género se identifica más usted? (Selecciona la opción que más te identifique)";

/// PHQ block start (label row).
pub const PHQ_START: &str = "Durante las últimas dos semanas, ¿con qué frecuencia ha tenido molestias \
     debido a los siguientes problemas?";

/// PHQ functional-difficulty question closing the block (label row).
pub const PHQ_END: &str = "Si ha marcado cualquiera de los problemas, ¿Qué tanta dificultad le han \
     dado estos problemas para hacer su trabajo, encargarse de las tareas del hogar, o llevarse \
     bien con otras personas?";

/// BAI block start (label row).
pub const BAI_START: &str = "En el cuestionario hay una lista de síntomas comunes de la ansiedad. Lea \
     cada uno de los ítems atentamente, e indique cuanto le ha afectado en la última semana \
     incluyendo hoy:";

/// Last BAI item (item label row).
pub const BAI_END: &str = "Con sudores, fríos o calientes.";

/// OCI-R block start (label row).
pub const OCI_START: &str = "Escoge la opción que mejor describe CUÁNTO malestar o molestia te ha \
     producido esta experiencia durante el último mes.";

/// Last OCI-R item (item label row).
pub const OCI_END: &str =
    "Tener con frecuencia pensamientos repugnantes y que le cueste librarse de ellos.";

/// STAI block start (label row).
pub const STAI_START: &str = "Lea cada frase y señale la opción que indique mejor cómo se siente en \
     general, en la mayoría de las ocasiones. No hay respuestas buenas ni malas. No emplee \
     demasiado tiempo en cada frase y conteste señalando la respuesta que mejor describa cómo se \
     siente usted generalmente.";

/// Last STAI item (item label row).
pub const STAI_END: &str =
    "Cuando pienso sobre asuntos y preocupaciones actuales me pongo tenso y agitado.";

/// BFI block start (label row).
pub const BFI_START: &str = "Por favor, valore cada afirmación del cuestionario en una escala del 1 \
     al 5, donde 1 significa \"Muy en desacuerdo\" y 5 \"Muy de acuerdo\".";

/// Last BFI item (item label row).
pub const BFI_END: &str = "Es sofisticado en arte, música o literatura.";

/// ASSIST question 1, opening the substance block (label row).
pub const ASSIST_START: &str = "A lo largo de la vida, ¿cuál de las siguientes sustancias ha \
     consumido alguna vez? (solo que consumió sin receta médica)";

/// ASSIST injection question, just past the substance block (label row).
pub const ASSIST_END: &str = "¿Alguna vez ha consumido alguna droga por vía inyectada? (solo las \
     que consumió sin receta médica)";

/// ASSIST "none of the above" choice of question 1 (item label row).
pub const ASSIST_NONE: &str = "Ninguna de las anteriores";
