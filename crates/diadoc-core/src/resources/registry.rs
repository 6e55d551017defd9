//! Static registry of every remote operation and its status diagnostics.

use crate::types::Method;

use super::{Completion, Resource};

pub(super) static RESOURCES: &[Resource] = &[
    Resource {
        name: "Authenticate",
        method: Method::Post,
        path: "/V3/Authenticate",
        completion: Completion::Immediate,
        statuses: &[],
    },
    // Organizations and boxes
    Resource {
        name: "GetBox",
        method: Method::Get,
        path: "/GetBox",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Ящик с указанным идентификатором не найден в справочнике"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDepartment",
        method: Method::Get,
        path: "/GetDepartment",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к подразделению с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "не найдена организация или подразделение с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetMyOrganizations",
        method: Method::Get,
        path: "/GetMyOrganizations",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к подразделению с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "не найдена организация или подразделение с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetOrganization",
        method: Method::Get,
        path: "/GetOrganization",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к подразделению с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "организация с указанным идентификатором не найдена в справочнике"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetOrganizationsByInnKpp",
        method: Method::Get,
        path: "/GetOrganizationsByInnKpp",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к подразделению с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "организация с указанным идентификатором не найдена в справочнике"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetOrganizationsByInnList",
        method: Method::Post,
        path: "/GetOrganizationsByInnList",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к подразделению с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Организация с указанным идентификатором не найдена в справочнике"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetOrganizationFeatures",
        method: Method::Get,
        path: "/GetOrganizationFeatures",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "Организация с указанным идентификатором не найдена в справочнике"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Employees and users
    Resource {
        name: "CreateEmployee",
        method: Method::Post,
        path: "/CreateEmployee",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "DeleteEmployee",
        method: Method::Post,
        path: "/DeleteEmployee",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Не найден сотрудник с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetEmployee",
        method: Method::Get,
        path: "/GetEmployee",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "В указанном ящике нет пользователя с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetEmployees",
        method: Method::Get,
        path: "/GetEmployees",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Указанного ящика не существует"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetMyEmployee",
        method: Method::Get,
        path: "/GetMyEmployee",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "В указанном ящике нет пользователя с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetMyUserV2",
        method: Method::Get,
        path: "/V2/GetMyUser",
        completion: Completion::Immediate,
        statuses: &[
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetMyUser",
        method: Method::Get,
        path: "/GetMyUser",
        completion: Completion::Immediate,
        statuses: &[
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetOrganizationUsers",
        method: Method::Get,
        path: "/GetOrganizationUsers",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Организация с указанным идентификатором не найдена в справочнике"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetSubscriptions",
        method: Method::Get,
        path: "/GetSubscriptions",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора и не от имени пользователя, подписки которого запрошены"),
            (404, "В указанном ящике нет пользователя с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "UpdateEmployee",
        method: Method::Post,
        path: "/UpdateEmployee",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "UpdateMyUser",
        method: Method::Post,
        path: "/UpdateMyUser",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "UpdateSubscriptions",
        method: Method::Post,
        path: "/UpdateSubscriptions",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора и не от имени пользователя, подписки которого редактируются"),
            (404, "в указанном ящике нет пользователя с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetMyCertificates",
        method: Method::Get,
        path: "/GetMyCertificates",
        completion: Completion::Immediate,
        statuses: &[
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Departments
    Resource {
        name: "GetDepartmentFull",
        method: Method::Get,
        path: "/admin/GetDepartment",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Пв указанном ящике нет подразделения с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDepartmentsFull",
        method: Method::Get,
        path: "/admin/GetDepartments",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "В указанном ящике нет подразделения с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "CreateDepartment",
        method: Method::Post,
        path: "/admin/CreateDepartment",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "В указанном ящике нет подразделения с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "UpdateDepartment",
        method: Method::Post,
        path: "/admin/UpdateDepartment",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "В указанном ящике нет подразделения с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "DeleteDepartment",
        method: Method::Post,
        path: "/admin/DeleteDepartment",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "В указанном ящике нет подразделения с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Запрещено удалить подразделение в переданным departmentId"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Counteragents
    Resource {
        name: "AcquireCounteragent",
        method: Method::Post,
        path: "/V2/AcquireCounteragent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен, или у пользователя недостаточно прав для доступа ко всем документам организации, или у пользователя нет права работать со списком контрагентов"),
            (404, "в указанном ящике нет документов с указанными идентификаторами"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Требуется заявка на роуминг для отправки приглашения роуминговому контрагенту"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "AcquireCounteragentResult",
        method: Method::Get,
        path: "/AcquireCounteragentResult",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя недостаточно прав для доступа ко всем документам организации"),
            (404, "В указанном ящике нет документов с указанными идентификаторами"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Не удалось выполнить запрос на приглашение контрагента"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "BreakWithCounteragent",
        method: Method::Post,
        path: "/BreakWithCounteragent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к списку контрагентов организации myOrgId с предоставленным авторизационным токеном запрещен или у пользователя нет права работать со списками контрагентов"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "метод используется для отзыва приглашения с вложением"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetCounteragentV1",
        method: Method::Get,
        path: "/GetCounteragent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором myOrgId закончилась подписка на API"),
            (403, "Доступ к списку контрагентов организации myOrgId с предоставленным авторизационным токеном запрещен"),
            (404, "Партнерские отношения между организациями myOrgId и counteragentOrgId не установлены"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetCounteragentV2",
        method: Method::Get,
        path: "/V2/GetCounteragent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором myOrgId закончилась подписка на API"),
            (403, "Доступ к списку контрагентов организации myOrgId с предоставленным авторизационным токеном запрещен"),
            (404, "Партнерские отношения между организациями myOrgId и counteragentOrgId не установлены"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetCounteragentsV1",
        method: Method::Get,
        path: "/GetCounteragents",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором myOrgId закончилась подписка на API"),
            (403, "Доступ к списку контрагентов организации myOrgId с предоставленным авторизационным токеном запрещен"),
            (404, "Партнерские отношения между организациями myOrgId и counteragentOrgId не установлены"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetCounteragentsV2",
        method: Method::Get,
        path: "/V2/GetCounteragents",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором myOrgId закончилась подписка на API"),
            (403, "Доступ к списку контрагентов организации myOrgId с предоставленным авторизационным токеном запрещен"),
            (404, "Партнерские отношения между организациями myOrgId и counteragentOrgId не установлены"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetCounteragentCertificates",
        method: Method::Get,
        path: "/GetCounteragentCertificates",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором myOrgId закончилась подписка на API"),
            (403, "Доступ к списку сертификатов организации counteragentOrgId от организации myOrgId с предоставленным авторизационным токеном запрещен"),
            (404, "Партнерские отношения между организациями myOrgId и counteragentOrgId не установлены"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Messages
    Resource {
        name: "GetEntityContent",
        method: Method::Get,
        path: "/V4/GetEntityContent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "в указанном ящике нет сообщения с идентификатором messageId, или в указанном сообщении нет сущности с идентификатором entityId, или у указанной сущности отсутствует содержимое"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetMessage",
        method: Method::Get,
        path: "/V5/GetMessage",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "в указанном ящике нет сообщений с данным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "PostMessage",
        method: Method::Post,
        path: "/V3/PostMessage",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат, или отсутствуют обязательные параметры, или превышено максимально допустимое количество документов в сообщении"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка отправить дубликат сообщения или запрещен приема документов от контрагентов согласно свойству Sociability из Organization"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "PostMessagePatch",
        method: Method::Post,
        path: "/V3/PostMessagePatch",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат, или отсутствуют обязательные параметры, или превышено максимально допустимое количество документов в сообщении"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "осуществляется попытка отправить дубликат или запрещен прием документов от контрагентов согласно свойству Sociability в структуре …/proto/Organization"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Box events
    Resource {
        name: "GetEvent",
        method: Method::Get,
        path: "/V2/GetEvent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "В указанном ящике нет событий с данным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetNewEvents",
        method: Method::Get,
        path: "/V7/GetNewEvents",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetLastEvent",
        method: Method::Get,
        path: "/GetLastEvent",
        completion: Completion::EmptyOnNoContent,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Docflows
    Resource {
        name: "GetDocflows",
        method: Method::Post,
        path: "/V3/GetDocflows",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет прав для доступа ко всем документам организации"),
            (404, "В указанном ящике нет документов с указанными идентификаторами"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDocflowsByPacketId",
        method: Method::Post,
        path: "/V3/GetDocflowsByPacketId",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет прав для доступа ко всем документам организации"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "SearchDocflows",
        method: Method::Post,
        path: "/V3/SearchDocflows",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет прав для доступа ко всем документам организации"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDocflowEvents",
        method: Method::Post,
        path: "/V3/GetDocflowEvents",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет прав для доступа ко всем документам организации"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Documents and shelf
    Resource {
        name: "Delete",
        method: Method::Post,
        path: "/Delete",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или запрос сделан не от имени администратора"),
            (404, "Не найдено сообщение или документ с указанными идентификаторами."),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка повторного удаления документа или сообщения"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "DetectCustomPrintForms",
        method: Method::Post,
        path: "/DetectCustomPrintForms",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "ForwardDocument",
        method: Method::Post,
        path: "/V2/ForwardDocument",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDocument",
        method: Method::Get,
        path: "/V3/GetDocument",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "В указанном ящике не найдено сообщение с идентификатором messageId или в указанном сообщении нет сущности типа LetterAttachment с идентификатором entityId"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDocuments",
        method: Method::Get,
        path: "/V3/GetDocuments",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "В указанном ящике не найдено сообщение с идентификатором messageId или в указанном сообщении нет сущности типа LetterAttachment с идентификатором entityId"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetDocumentsByMessageId",
        method: Method::Get,
        path: "/GetDocumentsByMessageId",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "В указанном ящике не найдено сообщение с идентификатором messageId или в указанном сообщении нет сущности типа LetterAttachment с идентификатором entityId"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetForwardedDocumentEvents",
        method: Method::Post,
        path: "/V2/GetForwardedDocumentEvents",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Не найдено сообщение с заданным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetResolutionRoutesForOrganization",
        method: Method::Get,
        path: "/GetResolutionRoutesForOrganization",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Не найдено сообщение с заданным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetForwardedEntityContent",
        method: Method::Get,
        path: "/V2/GetForwardedEntityContent",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Не найдено сообщение/документ/сущность с заданным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetForwardedDocuments",
        method: Method::Post,
        path: "/V2/GetForwardedDocuments",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Не найдено сообщение/документ с заданным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "GetGeneratedPrintForm",
        method: Method::Get,
        path: "/GetGeneratedPrintForm",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Не найдено сформированной печатной формы"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "MoveDocuments",
        method: Method::Post,
        path: "/MoveDocuments",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "RecycleDraft",
        method: Method::Post,
        path: "/RecycleDraft",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "Не найден черновик с указанным идентификатором"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка удаления уже утилизированного черновика"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "Restore",
        method: Method::Post,
        path: "/Restore",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "Не найдено сообщение или документ с указанными идентификаторами"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка повторного восстановления документа или сообщения"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "ShelfDownload",
        method: Method::Get,
        path: "/ShelfDownload",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Файл на полке не найден"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "ShelfUpload",
        method: Method::Post,
        path: "/ShelfUpload",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "SendDraft",
        method: Method::Post,
        path: "/SendDraft",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором boxId закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен или у пользователя нет доступа к каким-то документам из запроса"),
            (404, "Файл на полке не найден"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка отправить дубликат сообщения, указан несуществующий идентификатор содержимого документа, подготовленного к отправке, или запрещен прием документов от контрагентов согласно свойству Sociability в структуре Organization"),
            (500, "при обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    // Templates
    Resource {
        name: "GetTemplate",
        method: Method::Get,
        path: "/GetTemplate",
        completion: Completion::Immediate,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к ресурсу с предоставленным авторизационным токеном запрещен"),
            (404, "Не найден ящик или шаблон с указанными идентификаторами"),
            (405, "Используется неподходящий HTTP-метод"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "PostTemplate",
        method: Method::Post,
        path: "/PostTemplate",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к ресурсу с предоставленным авторизационным токеном запрещен"),
            (404, "Не найден ящик или шаблон с указанными идентификаторами"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка отправить дубликат сообщения"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "PostTemplatePatch",
        method: Method::Post,
        path: "/PostTemplatePatch",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен, или нет доступа к шаблону, или отсутствуют права на создание/редактирование документов"),
            (404, "Не найден шаблон документа"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, " осуществляется попытка отклонить шаблон в неподходящем статусе"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
    Resource {
        name: "TransformTemplateToMessage",
        method: Method::Post,
        path: "/TransformTemplateToMessage",
        completion: Completion::Polled,
        statuses: &[
            (400, "Данные в запросе имеют неверный формат или отсутствуют обязательные параметры"),
            (401, "В запросе отсутствует HTTP-заголовок Authorization или в этом заголовке содержатся некорректные авторизационные данные"),
            (402, "У организации с указанным идентификатором orgID закончилась подписка на API"),
            (403, "Доступ к ящику с предоставленным авторизационным токеном запрещен"),
            (404, "Не найден шаблон документа"),
            (405, "Используется неподходящий HTTP-метод"),
            (409, "Осуществляется попытка отправить дубликат сообщения"),
            (500, "При обработке запроса возникла непредвиденная ошибка"),
        ],
    },
];
